//! Pipeline entry points over loaded documents.

use std::path::{Path, PathBuf};

use doclint_core::slug::kebab_case;
use doclint_core::{Api, ApiSummary, RecordValidator, SlugAliases, UrlTemplates, Verdict};

use crate::assemble::{AssemblyContext, assemble};
use crate::i18n::TranslatedApi;
use crate::markdown::parse;
use crate::segment::{outline, surfaces};

/// Version stamped on records when none is configured.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// One markdown file as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    pub path: PathBuf,
    pub markdown: String,
}

impl SourceDoc {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, markdown: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            markdown: markdown.into(),
        }
    }

    /// File name without its extension; the document's key for slugs and pairing.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Settings that shape every record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    pub version: String,
    pub aliases: SlugAliases,
    pub urls: UrlTemplates,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            aliases: SlugAliases::default(),
            urls: UrlTemplates::default(),
        }
    }
}

impl LintOptions {
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

/// Extract and validate every API declared by `doc`: the module first, then its
/// classes in heading order.
#[must_use]
pub fn parse_document(
    doc: &SourceDoc,
    options: &LintOptions,
    validator: &dyn RecordValidator,
) -> Vec<Api> {
    let root = outline(parse(&doc.markdown));
    let ctx = AssemblyContext {
        version: &options.version,
        aliases: &options.aliases,
        urls: &options.urls,
        validator,
    };
    surfaces(&root, doc.stem())
        .iter()
        .map(|surface| assemble(surface, &ctx))
        .collect()
}

/// Lint a set of documents, in the order given.
#[must_use]
pub fn lint(docs: &[SourceDoc], options: &LintOptions, validator: &dyn RecordValidator) -> Vec<Api> {
    let apis: Vec<Api> = docs
        .iter()
        .flat_map(|doc| {
            let apis = parse_document(doc, options, validator);
            tracing::debug!(path = %doc.path.display(), apis = apis.len(), "parsed document");
            apis
        })
        .collect();

    tracing::info!(
        documents = docs.len(),
        apis = apis.len(),
        invalid = apis.iter().filter(|api| !api.valid()).count(),
        "lint finished"
    );
    apis
}

/// Check translated documents against a baseline. A document is paired with the
/// first baseline entry whose slug (or kebab-cased name) equals its file stem;
/// documents with no counterpart are skipped.
#[must_use]
pub fn lint_i18n(
    docs: &[SourceDoc],
    baseline: &[ApiSummary],
    aliases: &SlugAliases,
) -> Vec<TranslatedApi> {
    docs.iter()
        .filter_map(|doc| {
            let stem = doc.stem();
            let Some(api) = baseline
                .iter()
                .find(|api| api.slug == stem || kebab_case(&api.name) == stem)
            else {
                tracing::warn!(path = %doc.path.display(), "no baseline API for translated document, skipping");
                return None;
            };
            Some(TranslatedApi::new(&api.name, &doc.markdown, aliases))
        })
        .collect()
}
