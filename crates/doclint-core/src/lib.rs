//! # doclint-core
//!
//! Core types shared across all doclint crates:
//! - API records (`Api`) and their explicit builder (`ApiBuilder`)
//! - Members (methods, events, properties) and their parameters
//! - Collection and type enums with their documentation labels
//! - Slug and canonical URL derivation, including the alias table
//! - The `RecordValidator` seam and the `Verdict` report contract
//! - Baseline entries (`ApiSummary`) read back from a persisted run

pub mod entities;
pub mod enums;
pub mod report;
pub mod slug;

pub use entities::{
    Api, ApiBuilder, ApiSummary, Member, MemberCollection, Parameter, PossibleValue, Process,
};
pub use enums::{ApiType, Collection, MemberKind, Platform};
pub use report::{AcceptAll, RecordValidator, Verdict};
pub use slug::{SlugAliases, UrlTemplates};
