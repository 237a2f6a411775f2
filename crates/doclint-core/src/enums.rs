//! API types, member collections, member kinds, and platforms.
//!
//! Collections know the heading label that introduces them in a document and the
//! camelCase key they serialize under.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ApiType
// ---------------------------------------------------------------------------

/// Whether a documented surface is a module or a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ApiType {
    Module,
    Class,
}

impl ApiType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::Class => "Class",
        }
    }
}

impl fmt::Display for ApiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberKind
// ---------------------------------------------------------------------------

/// Shape of a member. Decides whether it carries a signature, parameters, or returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Property,
    Event,
}

impl MemberKind {
    /// Parameters of methods carry a `required` flag; event payloads never do.
    #[must_use]
    pub const fn tracks_required(self) -> bool {
        matches!(self, Self::Method)
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// The member collections an API record groups its members into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Methods,
    StaticMethods,
    InstanceMethods,
    InstanceProperties,
    Events,
    InstanceEvents,
}

impl Collection {
    pub const ALL: [Self; 6] = [
        Self::Methods,
        Self::StaticMethods,
        Self::InstanceMethods,
        Self::InstanceProperties,
        Self::Events,
        Self::InstanceEvents,
    ];

    /// Map a section heading label to its collection. Labels match exactly after trimming.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Methods" => Some(Self::Methods),
            "Static Methods" => Some(Self::StaticMethods),
            "Instance Methods" => Some(Self::InstanceMethods),
            "Instance Properties" => Some(Self::InstanceProperties),
            "Events" => Some(Self::Events),
            "Instance Events" => Some(Self::InstanceEvents),
            _ => None,
        }
    }

    /// Heading label as written in documentation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Methods => "Methods",
            Self::StaticMethods => "Static Methods",
            Self::InstanceMethods => "Instance Methods",
            Self::InstanceProperties => "Instance Properties",
            Self::Events => "Events",
            Self::InstanceEvents => "Instance Events",
        }
    }

    /// Key the collection serializes under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Methods => "methods",
            Self::StaticMethods => "staticMethods",
            Self::InstanceMethods => "instanceMethods",
            Self::InstanceProperties => "instanceProperties",
            Self::Events => "events",
            Self::InstanceEvents => "instanceEvents",
        }
    }

    #[must_use]
    pub const fn member_kind(self) -> MemberKind {
        match self {
            Self::Methods | Self::StaticMethods | Self::InstanceMethods => MemberKind::Method,
            Self::InstanceProperties => MemberKind::Property,
            Self::Events | Self::InstanceEvents => MemberKind::Event,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Operating systems a member can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "macOS")]
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Recognize a platform marker word. `OS X` era spellings are accepted.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim() {
            "macOS" | "OS X" | "OSX" => Some(Self::MacOs),
            "Windows" => Some(Self::Windows),
            "Linux" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Every platform named by a marker such as `macOS, Windows`, `macOS and Linux`
    /// or `Windows Linux`. `None` when any other word appears.
    #[must_use]
    pub fn parse_list(text: &str) -> Option<Vec<Self>> {
        let text = text.replace("OS X", "OSX");
        let mut found = Vec::new();
        for word in text.split(|c: char| c == ',' || c.is_whitespace()) {
            if word.is_empty() || word == "and" {
                continue;
            }
            let platform = Self::parse(word)?;
            if !found.contains(&platform) {
                found.push(platform);
            }
        }
        (!found.is_empty()).then_some(found)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
