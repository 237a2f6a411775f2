//! Structural defects found while extracting an API from its document.
//!
//! Defects never abort a run. They are attached to the API they were found in and
//! show up in that API's report.

use doclint_core::Collection;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionDefect {
    /// The document has no H1 or H2 naming a module or class.
    #[error("missing module or class declaration heading")]
    MissingDeclaration,

    /// A member heading did not follow the convention for its collection.
    #[error("unable to parse {collection} heading '{heading}'")]
    UnparsableHeading {
        collection: Collection,
        heading: String,
    },

    /// A parameter bullet did not start with a code span naming the parameter.
    #[error("unable to parse parameter of {member}: '{text}'")]
    UnparsableParameter { member: String, text: String },

    /// A parameter bullet named the parameter but gave no type.
    #[error("parameter '{parameter}' of {member} has no type")]
    MissingType { member: String, parameter: String },

    /// An item of an enumerated value list had no value.
    #[error("unable to parse possible value of {member}.{parameter}: '{text}'")]
    UnparsablePossibleValue {
        member: String,
        parameter: String,
        text: String,
    },

    /// The signature names parameters that the parameter list does not document
    /// in the same order.
    #[error("{member}{signature} is missing parameter docs")]
    UndocumentedParameters { member: String, signature: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_member() {
        let defect = ExtractionDefect::UndocumentedParameters {
            member: "BrowserWindow.setSize".into(),
            signature: "(width, height[, animate])".into(),
        };
        assert_eq!(
            defect.to_string(),
            "BrowserWindow.setSize(width, height[, animate]) is missing parameter docs"
        );

        let defect = ExtractionDefect::UnparsableHeading {
            collection: Collection::InstanceMethods,
            heading: "win.setSize".into(),
        };
        assert_eq!(
            defect.to_string(),
            "unable to parse instanceMethods heading 'win.setSize'"
        );
    }
}
