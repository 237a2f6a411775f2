//! Slug alias table.

use std::collections::BTreeMap;

use doclint_core::SlugAliases;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlugConfig {
    /// API name → slug, merged over the built-in table (`webviewTag` → `webview`).
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl SlugConfig {
    /// The built-in aliases with the configured ones merged over them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if an alias is not a lower-kebab slug.
    pub fn slug_aliases(&self) -> Result<SlugAliases, ConfigError> {
        for (name, alias) in &self.aliases {
            if !is_slug(alias) {
                return Err(ConfigError::invalid(
                    format!("slugs.aliases.{name}"),
                    format!("'{alias}' is not a lower-kebab slug"),
                ));
            }
        }

        let mut aliases = SlugAliases::default();
        aliases.extend(self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(aliases)
    }
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_alias_survives_an_empty_table() {
        let aliases = SlugConfig::default().slug_aliases().expect("valid");
        assert_eq!(aliases.get("webviewTag"), Some("webview"));
    }

    #[test]
    fn configured_aliases_override_built_ins() {
        let config = SlugConfig {
            aliases: BTreeMap::from([
                ("webviewTag".to_string(), "webview-tag".to_string()),
                ("BrowserView".to_string(), "browser-view".to_string()),
            ]),
        };
        let aliases = config.slug_aliases().expect("valid");
        assert_eq!(aliases.get("webviewTag"), Some("webview-tag"));
        assert_eq!(aliases.slug_for("BrowserView"), "browser-view");
    }

    #[test]
    fn non_slug_alias_is_rejected() {
        let config = SlugConfig {
            aliases: BTreeMap::from([("app".to_string(), "App Module".to_string())]),
        };
        let err = config.slug_aliases().expect_err("spaces are not slugs");
        assert!(err.to_string().contains("slugs.aliases.app"), "{err}");
    }
}
