//! # doclint-config
//!
//! Layered configuration loading for doclint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCLINT_*` prefix, `__` as separator)
//! 2. Project-level `doclint.toml` (or the file passed with `--config`)
//! 3. User-level `~/.config/doclint/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCLINT_LINT__VERSION` -> `lint.version`,
//! `DOCLINT_LINT__REPO_BASE_URL` -> `lint.repo_base_url`, etc. Section and field
//! names are case-insensitive, but alias names keep their case:
//! `DOCLINT_SLUGS__ALIASES__webviewTag` -> `slugs.aliases.webviewTag`.
//!
//! # Usage
//!
//! ```no_run
//! use doclint_config::DoclintConfig;
//!
//! let config = DoclintConfig::load_with_dotenv(None).expect("config");
//! let aliases = config.slugs.slug_aliases().expect("aliases");
//! let version = config.lint.resolve_version(None);
//! ```

mod error;
mod lint;
mod slugs;

pub use error::ConfigError;
pub use lint::{LintConfig, NPM_VERSION_VAR};
pub use slugs::SlugConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::{Uncased, UncasedStr},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the project-level config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "doclint.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoclintConfig {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub slugs: SlugConfig,
}

impl DoclintConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `project` replaces `./doclint.toml` when given. Does NOT call `dotenvy`;
    /// use [`Self::load_with_dotenv`] for `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `project` does not exist, or
    /// `ConfigError::Figment` if a source cannot be read or does not match the
    /// configuration shape.
    pub fn load(project: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = project {
            if !path.is_file() {
                return Err(ConfigError::invalid(
                    "config",
                    format!("{} is not a file", path.display()),
                ));
            }
        }
        Self::figment(project).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(project: Option<&Path>) -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load(project)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment(project: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project config
        match project {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(
            Env::prefixed("DOCLINT_")
                .split("__")
                .map(env_key)
                .lowercase(false),
        )
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("doclint").join("config.toml"))
    }
}

/// Lowercase an environment key, except for the API name under `slugs.aliases`.
fn env_key(key: &UncasedStr) -> Uncased<'_> {
    let key = key.as_str();
    let mut parts = key.splitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(section), Some(field), Some(name))
            if section.eq_ignore_ascii_case("slugs") && field.eq_ignore_ascii_case("aliases") =>
        {
            Uncased::from(format!("slugs.aliases.{name}"))
        }
        _ => Uncased::from(key.to_ascii_lowercase()),
    }
}
