use std::path::Path;

use anyhow::Context;
use doclint_config::DoclintConfig;
use doclint_parser::lint_i18n;
use doclint_schema::SchemaRegistry;

use crate::cli::Cli;
use crate::commands::{Outcome, print_reports};
use crate::loader;
use crate::progress::Progress;

/// Check the translated docs under `cli.path` against the records in `infile`.
pub async fn handle(
    cli: &Cli,
    config: &DoclintConfig,
    infile: &Path,
    cwd: &Path,
) -> anyhow::Result<Outcome> {
    if !infile.exists() {
        anyhow::bail!(
            "`infile` must be an existing path on the filesystem. Got: {}",
            infile.display()
        );
    }

    let text = tokio::fs::read_to_string(infile)
        .await
        .with_context(|| format!("failed to read {}", infile.display()))?;
    let registry = SchemaRegistry::new().context("failed to load bundled schemas")?;
    let baseline = registry
        .parse_baseline(&text)
        .with_context(|| format!("invalid baseline {}", infile.display()))?;
    tracing::debug!(path = %infile.display(), apis = baseline.len(), "baseline loaded");

    let aliases = config.slugs.slug_aliases()?;
    let docs_path = cwd.join(&cli.path);

    let spinner = Progress::spinner("Parsing translated documentation");
    let docs = match loader::load_docs(&docs_path).await {
        Ok(docs) => docs,
        Err(error) => {
            spinner.finish_err("failed to load documentation");
            return Err(error).context("failed to load translated documentation");
        }
    };
    let checked = lint_i18n(&docs, &baseline, &aliases);
    spinner.finish_clear();

    print_reports(&checked);
    Ok(Outcome::from_verdicts(&checked))
}
