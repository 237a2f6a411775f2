//! Translation checks: a translated document must still name its API in its top
//! heading.

use doclint_core::{SlugAliases, Verdict};

use crate::markdown::{Block, parse, plain_text};

/// The verdict for one translated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedApi {
    canonical_name: String,
    name: String,
    expected_name: String,
    errors: Vec<String>,
}

impl TranslatedApi {
    /// Check `markdown` against the API it translates. Only the first H1 (else the
    /// first H2) is read.
    #[must_use]
    pub fn new(canonical_name: &str, markdown: &str, aliases: &SlugAliases) -> Self {
        let name = top_heading(markdown);
        let expected_name = aliases.expected_name(canonical_name).to_string();

        let mut errors = Vec::new();
        if !name.contains(expected_name.as_str()) {
            errors.push(format!(
                "expected '{expected_name}' Heading but found '{name}'"
            ));
        }

        Self {
            canonical_name: canonical_name.to_string(),
            name,
            expected_name,
            errors,
        }
    }

    #[must_use]
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    /// The heading text found in the translated document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn expected_name(&self) -> &str {
        &self.expected_name
    }
}

impl Verdict for TranslatedApi {
    fn report_name(&self) -> &str {
        &self.canonical_name
    }

    fn collection_errors(&self) -> &[String] {
        &self.errors
    }
}

fn top_heading(markdown: &str) -> String {
    let blocks = parse(markdown);
    let heading = |wanted: u8| {
        blocks.iter().find_map(|block| match block {
            Block::Heading { level, content } if *level == wanted => Some(plain_text(content)),
            _ => None,
        })
    };
    heading(1).or_else(|| heading(2)).unwrap_or_default()
}
