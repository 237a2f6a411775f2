//! Parameter bullet extraction.
//!
//! A parameter bullet reads ``* `name` Type (optional) - description``. The type may
//! be a plain word, a link, a code span, or a parenthesized union such as
//! `( String | Integer )`. A nested list becomes `possibleValues` when the bullet
//! announces "Possible values", `properties` when the bullet's type is a structured
//! object, and `possibleValues` otherwise.

use doclint_core::{Parameter, Platform, PossibleValue};

use crate::error::ExtractionDefect;
use crate::markdown::{Inline, ListItem, plain_text, rich_text};

const OPTIONAL_MARKER: &str = "(optional)";

const POSSIBLE_VALUES_MARKER: &str = "possible values";

/// Types whose nested list documents fields rather than allowed values.
const STRUCTURED_TYPES: [&str; 3] = ["Object", "Event", "Function"];

/// How `required` is decided for a list of parameters.
#[derive(Debug, Clone, Copy)]
pub enum Requirement<'a> {
    /// Event payloads carry no `required` key.
    Untracked,
    /// Method arguments. Names listed here were bracketed in the signature.
    Tracked { optional: &'a [String] },
}

impl Requirement<'_> {
    fn required(self, name: &str, marked_optional: bool) -> Option<bool> {
        match self {
            Self::Untracked => None,
            Self::Tracked { optional } => {
                Some(!(marked_optional || optional.iter().any(|o| o == name)))
            }
        }
    }

    /// Nested properties only honour their own `(optional)` marker.
    const fn nested(self) -> Self {
        match self {
            Self::Untracked => Self::Untracked,
            Self::Tracked { .. } => Self::Tracked { optional: &[] },
        }
    }
}

/// Extract every bullet of a parameter list. Bullets that cannot be read are
/// skipped and reported.
pub fn parameters(
    items: &[ListItem],
    member: &str,
    requirement: Requirement<'_>,
    defects: &mut Vec<ExtractionDefect>,
) -> Vec<Parameter> {
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        let bullet = match Bullet::read(item) {
            Ok(bullet) => bullet,
            Err(BulletError::NoName(text)) => {
                defects.push(ExtractionDefect::UnparsableParameter {
                    member: member.to_string(),
                    text,
                });
                continue;
            }
            Err(BulletError::NoType(parameter)) => {
                defects.push(ExtractionDefect::MissingType {
                    member: member.to_string(),
                    parameter,
                });
                continue;
            }
        };

        let (description, marked_optional) = description(&bullet.rest);
        let mut parameter = Parameter {
            required: requirement.required(&bullet.name, marked_optional),
            name: bullet.name,
            type_name: bullet.type_name,
            description,
            possible_values: None,
            properties: None,
        };

        if let Some(nested) = item.nested() {
            if describes_object(&parameter.type_name, &parameter.description) {
                parameter.properties = Some(parameters(
                    nested,
                    &format!("{member}.{}", parameter.name),
                    requirement.nested(),
                    defects,
                ));
            } else {
                parameter.possible_values =
                    Some(possible_values(nested, member, &parameter.name, defects));
            }
        }

        out.push(parameter);
    }

    out
}

/// A nested list describes object properties when the parent's type is structured
/// and its description does not announce an enumeration.
fn describes_object(type_name: &str, description: &str) -> bool {
    STRUCTURED_TYPES.contains(&type_name)
        && !description
            .to_ascii_lowercase()
            .contains(POSSIBLE_VALUES_MARKER)
}

fn possible_values(
    items: &[ListItem],
    member: &str,
    parameter: &str,
    defects: &mut Vec<ExtractionDefect>,
) -> Vec<PossibleValue> {
    let mut out = Vec::with_capacity(items.len());

    for item in items {
        let lead = item.lead();
        let (value, description) = match lead.first() {
            Some(Inline::Code(code)) => (code.trim().to_string(), strip_dash(&rich_text(&lead[1..]))),
            _ => {
                let text = plain_text(lead);
                match text.split_once(" - ") {
                    Some((value, rest)) => (value.trim().to_string(), rest.trim().to_string()),
                    None => (text.trim().to_string(), String::new()),
                }
            }
        };

        if value.is_empty() {
            defects.push(ExtractionDefect::UnparsablePossibleValue {
                member: member.to_string(),
                parameter: parameter.to_string(),
                text: plain_text(lead),
            });
            continue;
        }
        out.push(PossibleValue { value, description });
    }

    out
}

/// Description text with platform emphasis removed, and whether the bullet was
/// marked `(optional)`.
fn description(rest: &[Inline]) -> (String, bool) {
    let kept: Vec<Inline> = rest
        .iter()
        .filter(|inline| !is_platform_marker(inline))
        .cloned()
        .collect();

    let text = rich_text(&kept);
    let mut optional = false;
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix(OPTIONAL_MARKER) {
        optional = true;
        text = stripped.trim_start();
    }
    let mut text = strip_dash(text);
    if let Some(stripped) = text.strip_prefix(OPTIONAL_MARKER) {
        optional = true;
        text = stripped.trim_start().to_string();
    }
    (text, optional)
}

fn strip_dash(text: &str) -> String {
    let text = text.trim();
    text.strip_prefix('-').unwrap_or(text).trim().to_string()
}

fn is_platform_marker(inline: &Inline) -> bool {
    match inline {
        Inline::Emphasis(content) => Platform::parse_list(&plain_text(content)).is_some(),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Bullet head
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum BulletError {
    NoName(String),
    NoType(String),
}

#[derive(Debug)]
struct Bullet {
    name: String,
    type_name: String,
    rest: Vec<Inline>,
}

impl Bullet {
    fn read(item: &ListItem) -> Result<Self, BulletError> {
        let lead = item.lead();
        let (name, tail) = match lead.split_first() {
            Some((Inline::Code(name), tail)) if !name.trim().is_empty() => {
                (name.trim().to_string(), tail)
            }
            _ => return Err(BulletError::NoName(plain_text(lead))),
        };

        for (index, inline) in tail.iter().enumerate() {
            let after = &tail[index + 1..];
            match inline {
                Inline::Text(text) => {
                    let trimmed = text.trim_start();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let (type_name, remainder) = read_type_word(trimmed);
                    let Some(type_name) = type_name else {
                        return Err(BulletError::NoType(name));
                    };
                    let mut rest = Vec::with_capacity(after.len() + 1);
                    if !remainder.is_empty() {
                        rest.push(Inline::Text(remainder.to_string()));
                    }
                    rest.extend_from_slice(after);
                    return Ok(Self {
                        name,
                        type_name,
                        rest,
                    });
                }
                Inline::Link { content, .. } => {
                    return Ok(Self {
                        name,
                        type_name: plain_text(content),
                        rest: after.to_vec(),
                    });
                }
                Inline::Code(code) => {
                    return Ok(Self {
                        name,
                        type_name: code.trim().to_string(),
                        rest: after.to_vec(),
                    });
                }
                _ => break,
            }
        }

        Err(BulletError::NoType(name))
    }
}

/// Split the type off the front of `text`, returning it and the text that follows.
fn read_type_word(text: &str) -> (Option<String>, &str) {
    if text.starts_with(OPTIONAL_MARKER) || text.starts_with('-') {
        return (None, text);
    }

    if let Some(inner) = text.strip_prefix('(') {
        return match inner.split_once(')') {
            Some((union, remainder)) => {
                let members: Vec<&str> = union
                    .split('|')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .collect();
                if members.is_empty() {
                    (None, text)
                } else {
                    (Some(members.join(" | ")), remainder)
                }
            }
            None => (None, text),
        };
    }

    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    let word = text[..end].trim_end_matches([',', ':']);
    if word.is_empty() {
        (None, text)
    } else {
        (Some(word.to_string()), &text[end..])
    }
}
