//! Validation seam and pass/fail report contract.

/// Checks the serialized shape of an API record and lists every violation.
///
/// Implemented by the schema crate; kept here so records can be assembled without
/// depending on a particular schema engine.
pub trait RecordValidator {
    /// Violation messages in the order the validator reports them. Empty when valid.
    fn violations(&self, record: &serde_json::Value) -> Vec<String>;
}

/// Accepts every record. Useful when only extraction defects matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl RecordValidator for AcceptAll {
    fn violations(&self, _record: &serde_json::Value) -> Vec<String> {
        Vec::new()
    }
}

/// A record that has been judged and can print a one-line verdict.
pub trait Verdict {
    /// Name shown in the report line.
    fn report_name(&self) -> &str;

    /// Errors computed when the record was built.
    fn collection_errors(&self) -> &[String];

    fn valid(&self) -> bool {
        self.collection_errors().is_empty()
    }

    /// `✓ <name>` when valid, else `✘ <name>` followed by one `  - <error>` line per error.
    fn report(&self) -> String {
        if self.valid() {
            return format!("✓ {}", self.report_name());
        }

        let mut out = format!("✘ {}", self.report_name());
        for error in self.collection_errors() {
            out.push_str("\n  - ");
            out.push_str(error);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Judged {
        name: String,
        errors: Vec<String>,
    }

    impl Verdict for Judged {
        fn report_name(&self) -> &str {
            &self.name
        }

        fn collection_errors(&self) -> &[String] {
            &self.errors
        }
    }

    #[test]
    fn valid_record_reports_check_mark() {
        let judged = Judged {
            name: "app".into(),
            errors: vec![],
        };
        assert!(judged.valid());
        assert_eq!(judged.report(), "✓ app");
    }

    #[test]
    fn invalid_record_lists_each_error_on_its_own_line() {
        let judged = Judged {
            name: "Tray".into(),
            errors: vec!["first".into(), "second".into()],
        };
        assert!(!judged.valid());
        assert_eq!(judged.report(), "✘ Tray\n  - first\n  - second");
    }

    #[test]
    fn accept_all_reports_nothing() {
        assert!(AcceptAll.violations(&serde_json::json!({})).is_empty());
    }
}
