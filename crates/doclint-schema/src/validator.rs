//! [`RecordValidator`] backed by the compiled API record schema.

use doclint_core::RecordValidator;

use crate::error::SchemaError;
use crate::registry::{API, SchemaRegistry};

/// Validates serialized API records against the bundled schema. Compiled once and
/// shared by every record of a run.
pub struct ApiValidator {
    schema: jsonschema::Validator,
}

impl ApiValidator {
    /// Compile the API schema from a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if the bundled schema cannot be loaded or compiled.
    pub fn new() -> Result<Self, SchemaError> {
        Self::from_registry(&SchemaRegistry::new()?)
    }

    /// Compile the API schema held by `registry`.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if the schema is missing or does not compile.
    pub fn from_registry(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        Ok(Self {
            schema: registry.compile(API)?,
        })
    }
}

impl RecordValidator for ApiValidator {
    fn violations(&self, record: &serde_json::Value) -> Vec<String> {
        self.schema
            .iter_errors(record)
            .map(|e| format!("{e}"))
            .collect()
    }
}
