//! Serde roundtrip and JsonSchema validation for persisted baseline entries.

use doclint_core::{ApiSummary, ApiType};
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn baseline_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(Vec<ApiSummary>)).unwrap()
}

#[test]
fn summary_roundtrips_and_validates() {
    let summary = ApiSummary {
        name: "BrowserWindow".into(),
        slug: "browser-window".into(),
        kind: ApiType::Class,
        version: "1.2.3".into(),
    };

    let json = serde_json::to_value(vec![&summary]).unwrap();
    let errors = validate_against_schema(&baseline_schema(), &json);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let recovered: Vec<ApiSummary> = serde_json::from_value(json).unwrap();
    assert_eq!(recovered, vec![summary]);
}

#[test]
fn full_persisted_records_satisfy_the_summary_schema() {
    let persisted = serde_json::json!([{
        "name": "app",
        "slug": "app",
        "type": "Module",
        "version": "1.2.3",
        "description": "Control your application's event lifecycle.",
        "process": {"main": true, "renderer": false},
        "websiteUrl": "http://electron.atom.io/docs/api/app",
        "repoUrl": "https://github.com/electron/electron/blob/v1.2.3/docs/api/app.md",
        "methods": [{"name": "quit", "signature": "()", "description": "Quit."}]
    }]);
    let errors = validate_against_schema(&baseline_schema(), &persisted);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn unknown_api_type_is_rejected() {
    let persisted = serde_json::json!([{
        "name": "app",
        "slug": "app",
        "type": "Namespace",
        "version": "1.2.3"
    }]);
    assert!(!validate_against_schema(&baseline_schema(), &persisted).is_empty());
}

#[test]
fn missing_name_is_rejected() {
    let persisted = serde_json::json!([{"slug": "app", "type": "Module", "version": "1.2.3"}]);
    assert!(!validate_against_schema(&baseline_schema(), &persisted).is_empty());
}
