//! # doclint-schema
//!
//! JSON Schema registry and validation for doclint.
//!
//! This crate provides:
//! - `SchemaRegistry`: the hand-written API record schema and the baseline schema
//!   generated from `doclint_core::ApiSummary`
//! - `ApiValidator`: the `RecordValidator` the assembler runs on every record
//! - Baseline parsing for translation checks
//!
//! ## Architecture
//!
//! Record types live in `doclint-core`. The parser only sees the `RecordValidator`
//! trait; the CLI wires an `ApiValidator` in.

pub mod error;
pub mod registry;
pub mod validator;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use validator::ApiValidator;
