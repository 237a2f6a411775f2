//! # doclint-parser
//!
//! Markdown API documentation extraction for doclint.
//!
//! A document goes through four stages:
//! - **Tree** (`markdown`): `pulldown-cmark` events folded into owned blocks and inlines
//! - **Segments** (`segment`): heading outline split into module and class surfaces
//! - **Members** (`extract`, `parameters`): signatures, parameters, events, properties
//! - **Records** (`assemble`): one validated [`doclint_core::Api`] per surface
//!
//! Translated documents are checked separately by [`TranslatedApi`], which reads
//! only the top heading.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod i18n;
pub mod lint;
pub mod markdown;
pub mod parameters;
pub mod segment;

pub use error::ExtractionDefect;
pub use i18n::TranslatedApi;
pub use lint::{DEFAULT_VERSION, LintOptions, SourceDoc, lint, lint_i18n, parse_document};
