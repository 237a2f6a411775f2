//! Central schema registry.
//!
//! Holds the hand-written API record schema and the baseline schema generated from
//! [`doclint_core::ApiSummary`] with [`schemars::schema_for!`]. Validation goes
//! through `jsonschema`.

use std::collections::HashMap;

use doclint_core::ApiSummary;
use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the API record schema.
pub const API: &str = "api";
/// Name of the persisted baseline schema (an array of API summaries).
pub const BASELINE: &str = "baseline";

const API_SCHEMA: &str = include_str!("../schemas/api.schema.json");

/// Every JSON Schema doclint validates against, by name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a `schemars`-generated schema, converted to a `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty))
                .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?,
        );
    };
}

impl SchemaRegistry {
    /// Build the registry.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if the bundled API schema is not valid JSON, or
    /// `SchemaError::Generation` if a generated schema cannot be converted.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas: HashMap<&'static str, serde_json::Value> = HashMap::new();

        schemas.insert(API, serde_json::from_str(API_SCHEMA)?);
        register!(schemas, BASELINE, Vec<ApiSummary>);

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Compile a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown name, or
    /// `SchemaError::Generation` if the schema does not compile.
    pub fn compile(&self, name: &str) -> Result<jsonschema::Validator, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        jsonschema::validator_for(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let validator = self.compile(name)?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Parse a persisted run, validating it against the baseline schema first.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if `text` is not JSON, or
    /// `SchemaError::ValidationFailed` if it does not match the baseline schema.
    pub fn parse_baseline(&self, text: &str) -> Result<Vec<ApiSummary>, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        self.validate(BASELINE, &value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
