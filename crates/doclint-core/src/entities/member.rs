use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::enums::Platform;

/// One value of an enumerated parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleValue {
    pub value: String,
    pub description: String,
}

/// A method argument, event payload entry, or nested object property.
///
/// `required` is only present for method arguments (and their nested properties).
/// `possible_values` and `properties` are only present when documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_values: Option<Vec<PossibleValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Parameter>>,
}

impl Parameter {
    /// Look up a nested property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Self> {
        self.properties.as_deref()?.iter().find(|p| p.name == name)
    }
}

/// A method, event, or property of an API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_parameters: Option<Vec<String>>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<Parameter>,
}

impl Member {
    /// A member with only a name and description. Extraction fills in the rest.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: None,
            signature_parameters: None,
            description: description.into(),
            platforms: None,
            parameters: Vec::new(),
            returns: Vec::new(),
        }
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    #[must_use]
    pub fn returned(&self, name: &str) -> Option<&Parameter> {
        self.returns.iter().find(|p| p.name == name)
    }

    /// Names parsed out of the signature. Empty for events and properties.
    #[must_use]
    pub fn signature_parameters(&self) -> &[String] {
        self.signature_parameters.as_deref().unwrap_or_default()
    }

    /// True when the signature names parameters that the parameter list does not
    /// document in the same order.
    #[must_use]
    pub fn has_undocumented_parameters(&self) -> bool {
        let names = self.signature_parameters();
        !names.is_empty()
            && !names
                .iter()
                .map(String::as_str)
                .eq(self.parameters.iter().map(|p| p.name.as_str()))
    }
}

/// Ordered members of one collection, addressable by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberCollection(Vec<Member>);

impl MemberCollection {
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Member> {
        self.0.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name(name).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, member: Member) {
        self.0.push(member);
    }
}

impl Deref for MemberCollection {
    type Target = [Member];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
