//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files, working directory, and env vars.

use doclint_config::{DoclintConfig, PROJECT_CONFIG_FILE};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_lint_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[lint]
version = "1.4.1"
website_base_url = "https://www.electronjs.org/docs/api/"
repo_base_url = "https://github.com/electron/electron/blob"
"#,
        )?;

        let config: DoclintConfig = Figment::from(Serialized::defaults(DoclintConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.lint.version.as_deref(), Some("1.4.1"));
        let urls = config.lint.url_templates().expect("valid bases");
        assert_eq!(
            urls.website_url("browser-window"),
            "https://www.electronjs.org/docs/api/browser-window"
        );
        Ok(())
    });
}

#[test]
fn loads_slug_aliases_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[slugs.aliases]
BrowserView = "browser-view"
webviewTag = "webview-tag"
"#,
        )?;

        let config: DoclintConfig = Figment::from(Serialized::defaults(DoclintConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        let aliases = config.slugs.slug_aliases().expect("valid aliases");
        assert_eq!(aliases.get("BrowserView"), Some("browser-view"));
        assert_eq!(aliases.get("webviewTag"), Some("webview-tag"));
        Ok(())
    });
}

#[test]
fn project_file_in_working_directory_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[lint]\nversion = \"2.0.0\"\n")?;

        let config = DoclintConfig::load(None).expect("config loads");
        assert_eq!(config.lint.version.as_deref(), Some("2.0.0"));
        Ok(())
    });
}

#[test]
fn explicit_config_path_replaces_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[lint]\nversion = \"2.0.0\"\n")?;
        jail.create_file("ci.toml", "[lint]\nversion = \"3.0.0\"\n")?;

        let config =
            DoclintConfig::load(Some(std::path::Path::new("ci.toml"))).expect("config loads");
        assert_eq!(config.lint.version.as_deref(), Some("3.0.0"));
        Ok(())
    });
}

#[test]
fn missing_explicit_config_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = DoclintConfig::load(Some(std::path::Path::new("nope.toml")))
            .expect_err("missing file");
        assert!(err.to_string().contains("nope.toml"), "{err}");
        Ok(())
    });
}

#[test]
fn malformed_section_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[lint]\nversion = [1, 2]\n")?;

        let err = DoclintConfig::load(None).expect_err("version must be a string");
        assert!(matches!(err, doclint_config::ConfigError::Figment(_)));
        Ok(())
    });
}
