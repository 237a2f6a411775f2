use doclint_config::{DoclintConfig, NPM_VERSION_VAR, PROJECT_CONFIG_FILE};
use figment::Jail;

#[test]
fn env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(PROJECT_CONFIG_FILE, "[lint]\nversion = \"1.0.0\"\n")?;
        jail.set_env("DOCLINT_LINT__VERSION", "1.4.1");

        let config = DoclintConfig::load(None).expect("config loads");
        assert_eq!(config.lint.version.as_deref(), Some("1.4.1"));
        Ok(())
    });
}

#[test]
fn env_sets_nested_url_base() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCLINT_LINT__REPO_BASE_URL", "https://github.com/fork/electron/blob");

        let config = DoclintConfig::load(None).expect("config loads");
        let urls = config.lint.url_templates().expect("valid bases");
        assert_eq!(
            urls.repo_url("1.4.1", "app"),
            "https://github.com/fork/electron/blob/v1.4.1/docs/api/app.md"
        );
        Ok(())
    });
}

#[test]
fn npm_package_version_is_the_last_fallback() {
    Jail::expect_with(|jail| {
        jail.set_env(NPM_VERSION_VAR, "1.4.1");

        let config = DoclintConfig::load(None).expect("config loads");
        assert_eq!(config.lint.resolve_version(None).as_deref(), Some("1.4.1"));
        assert_eq!(
            config.lint.resolve_version(Some("9.9.9")).as_deref(),
            Some("9.9.9")
        );
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_the_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "DOCLINT_LINT__WEBSITE_BASE_URL=https://docs.example.test/api\n",
        )?;

        let config = DoclintConfig::load_with_dotenv(None).expect("config loads");
        assert_eq!(
            config.lint.website_base_url,
            "https://docs.example.test/api"
        );
        Ok(())
    });
}

#[test]
fn env_alias_keeps_the_api_name_case() {
    Jail::expect_with(|jail| {
        jail.set_env("DOCLINT_SLUGS__ALIASES__webviewTag", "webview-tag");

        let config = DoclintConfig::load(None).expect("config loads");
        assert_eq!(
            config.slugs.aliases.get("webviewTag").map(String::as_str),
            Some("webview-tag")
        );
        let aliases = config.slugs.slug_aliases().expect("valid aliases");
        assert_eq!(aliases.slug_for("webviewTag"), "webview-tag");
        Ok(())
    });
}
