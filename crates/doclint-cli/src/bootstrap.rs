use std::path::Path;

use anyhow::Context;
use doclint_config::DoclintConfig;

/// Load layered configuration, reading `.env` from the working directory first.
pub fn load_config(project: Option<&Path>) -> anyhow::Result<DoclintConfig> {
    let config = DoclintConfig::load_with_dotenv(project).context("failed to load doclint config")?;
    tracing::debug!(
        global = ?DoclintConfig::global_config_path(),
        project = ?project,
        "configuration loaded"
    );
    Ok(config)
}
