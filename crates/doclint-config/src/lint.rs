//! Settings stamped on every record of a lint run.

use doclint_core::UrlTemplates;
use doclint_core::slug::{DEFAULT_REPO_BASE, DEFAULT_WEBSITE_BASE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable npm sets for package scripts.
pub const NPM_VERSION_VAR: &str = "npm_package_version";

fn default_website_base_url() -> String {
    DEFAULT_WEBSITE_BASE.to_string()
}

fn default_repo_base_url() -> String {
    DEFAULT_REPO_BASE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LintConfig {
    /// Version of the documented project. Falls back to `npm_package_version`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Base of `websiteUrl`; the slug is appended.
    #[serde(default = "default_website_base_url")]
    pub website_base_url: String,

    /// Base of `repoUrl`; `/v<version>/docs/api/<slug>.md` is appended.
    #[serde(default = "default_repo_base_url")]
    pub repo_base_url: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            version: None,
            website_base_url: default_website_base_url(),
            repo_base_url: default_repo_base_url(),
        }
    }
}

impl LintConfig {
    /// The version to stamp: `flag` if given, then `lint.version`, then the
    /// `npm_package_version` environment variable. Blank values are skipped.
    #[must_use]
    pub fn resolve_version(&self, flag: Option<&str>) -> Option<String> {
        let non_blank = |v: &str| {
            let v = v.trim();
            (!v.is_empty()).then(|| v.to_string())
        };
        flag.and_then(non_blank)
            .or_else(|| self.version.as_deref().and_then(non_blank))
            .or_else(|| std::env::var(NPM_VERSION_VAR).ok().as_deref().and_then(non_blank))
    }

    /// URL bases as templates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a base is not an http(s) URL.
    pub fn url_templates(&self) -> Result<UrlTemplates, ConfigError> {
        check_base("lint.website_base_url", &self.website_base_url)?;
        check_base("lint.repo_base_url", &self.repo_base_url)?;
        Ok(UrlTemplates::new(
            self.website_base_url.as_str(),
            self.repo_base_url.as_str(),
        ))
    }
}

fn check_base(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("expected an http(s) URL, got '{value}'"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_electron() {
        let config = LintConfig::default();
        assert!(config.version.is_none());
        let urls = config.url_templates().expect("defaults are valid");
        assert_eq!(
            urls.website_url("app"),
            "http://electron.atom.io/docs/api/app"
        );
    }

    #[test]
    fn flag_wins_over_config() {
        let config = LintConfig {
            version: Some("1.0.0".into()),
            ..LintConfig::default()
        };
        assert_eq!(config.resolve_version(Some("2.0.0")).as_deref(), Some("2.0.0"));
        assert_eq!(config.resolve_version(None).as_deref(), Some("1.0.0"));
        assert_eq!(config.resolve_version(Some("  ")).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn non_http_base_is_rejected() {
        let config = LintConfig {
            repo_base_url: "ftp://example.com".into(),
            ..LintConfig::default()
        };
        let err = config.url_templates().expect_err("ftp base");
        assert!(err.to_string().contains("lint.repo_base_url"), "{err}");
    }
}
