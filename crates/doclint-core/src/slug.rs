//! Slug and canonical URL derivation.
//!
//! A slug is the lower-kebab form of an API name. A small alias table covers names
//! whose slug cannot be derived (the `<webview>` tag is documented as `webviewTag`
//! but lives at `webview`).

use std::collections::BTreeMap;

/// Default base for `websiteUrl`.
pub const DEFAULT_WEBSITE_BASE: &str = "http://electron.atom.io/docs/api";

/// Default base for `repoUrl`; the version tag and doc path are appended.
pub const DEFAULT_REPO_BASE: &str = "https://github.com/electron/electron/blob";

/// Lower-kebab a camel, pascal, or snake cased identifier.
///
/// Word boundaries are a lower-to-upper transition, the last capital of an acronym
/// followed by a lowercase letter (`URLRequest` → `url-request`), and any of
/// `_`, `-`, `.` or whitespace. Other punctuation is dropped. Applying it to its
/// own output is a no-op.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            push_separator(&mut out);
            continue;
        }
        if !c.is_alphanumeric() {
            continue;
        }
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let boundary = prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
                || (prev.is_some_and(char::is_uppercase) && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                push_separator(&mut out);
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

// ---------------------------------------------------------------------------
// SlugAliases
// ---------------------------------------------------------------------------

/// Names whose slug (and translated heading) is not derivable from the name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAliases {
    aliases: BTreeMap<String, String>,
}

impl SlugAliases {
    /// An empty table. Every slug is derived.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Add or replace an alias.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), alias.into());
        self
    }

    /// Merge extra aliases over the current table.
    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// The name a document for `name` is expected to be headed with.
    #[must_use]
    pub fn expected_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Slug for an API name: the alias if one exists, else the kebab form.
    #[must_use]
    pub fn slug_for(&self, name: &str) -> String {
        self.get(name).map_or_else(|| kebab_case(name), ToString::to_string)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for SlugAliases {
    fn default() -> Self {
        Self::empty().with("webviewTag", "webview")
    }
}

// ---------------------------------------------------------------------------
// UrlTemplates
// ---------------------------------------------------------------------------

/// Bases the website and repository URLs are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplates {
    website_base: String,
    repo_base: String,
}

impl UrlTemplates {
    #[must_use]
    pub fn new(website_base: impl Into<String>, repo_base: impl Into<String>) -> Self {
        Self {
            website_base: website_base.into().trim_end_matches('/').to_string(),
            repo_base: repo_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// `<website_base>/<slug>`
    #[must_use]
    pub fn website_url(&self, slug: &str) -> String {
        format!("{}/{slug}", self.website_base)
    }

    /// `<repo_base>/v<version>/docs/api/<slug>.md`
    #[must_use]
    pub fn repo_url(&self, version: &str, slug: &str) -> String {
        format!("{}/v{version}/docs/api/{slug}.md", self.repo_base)
    }
}

impl Default for UrlTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_WEBSITE_BASE, DEFAULT_REPO_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BrowserWindow", "browser-window")]
    #[case("app", "app")]
    #[case("webContents", "web-contents")]
    #[case("powerSaveBlocker", "power-save-blocker")]
    #[case("NativeImage", "native-image")]
    #[case("URLRequest", "url-request")]
    #[case("desktopCapturer", "desktop-capturer")]
    #[case("web_frame", "web-frame")]
    #[case("<webview> Tag", "webview-tag")]
    fn kebab_case_derives_slugs(#[case] name: &str, #[case] slug: &str) {
        assert_eq!(kebab_case(name), slug);
    }

    #[rstest]
    #[case("BrowserWindow")]
    #[case("ClientRequest")]
    #[case("webviewTag")]
    fn kebab_case_is_idempotent(#[case] name: &str) {
        let once = kebab_case(name);
        assert_eq!(kebab_case(&once), once);
    }

    #[test]
    fn default_aliases_map_webview_tag() {
        let aliases = SlugAliases::default();
        assert_eq!(aliases.slug_for("webviewTag"), "webview");
        assert_eq!(aliases.expected_name("webviewTag"), "webview");
        assert_eq!(aliases.expected_name("BrowserWindow"), "BrowserWindow");
        assert_eq!(aliases.slug_for("BrowserWindow"), "browser-window");
    }

    #[test]
    fn empty_aliases_derive_every_slug() {
        let aliases = SlugAliases::empty();
        assert!(aliases.is_empty());
        assert_eq!(aliases.slug_for("webviewTag"), "webview-tag");
    }

    #[test]
    fn extend_overrides_existing_entries() {
        let mut aliases = SlugAliases::default();
        aliases.extend([("webviewTag", "webview-tag"), ("remote", "remote-module")]);
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.slug_for("webviewTag"), "webview-tag");
        assert_eq!(aliases.slug_for("remote"), "remote-module");
    }

    #[test]
    fn urls_are_built_from_slug_and_version() {
        let urls = UrlTemplates::default();
        assert_eq!(urls.website_url("tray"), "http://electron.atom.io/docs/api/tray");
        assert_eq!(
            urls.repo_url("1.2.3", "tray"),
            "https://github.com/electron/electron/blob/v1.2.3/docs/api/tray.md"
        );
    }

    #[test]
    fn url_bases_ignore_trailing_slash() {
        let urls = UrlTemplates::new("https://docs.example/api/", "https://git.example/blob/");
        assert_eq!(urls.website_url("app"), "https://docs.example/api/app");
        assert_eq!(
            urls.repo_url("2.0.0", "app"),
            "https://git.example/blob/v2.0.0/docs/api/app.md"
        );
    }
}
