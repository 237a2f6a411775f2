//! Member extraction: one method, property, or event per heading inside a labeled
//! collection section.

use doclint_core::{Collection, Member, MemberKind, Platform};

use crate::error::ExtractionDefect;
use crate::markdown::{Block, Inline, ListItem, plain_text, rich_text};
use crate::parameters::{Requirement, parameters};
use crate::segment::Section;

/// Extract the member declared by `section`. Returns `None` (and records a defect)
/// when the heading does not follow its collection's convention.
pub fn member(
    collection: Collection,
    section: &Section,
    owner: &str,
    defects: &mut Vec<ExtractionDefect>,
) -> Option<Member> {
    let heading = Heading::read(collection, &section.title);
    let Some(heading) = heading else {
        defects.push(ExtractionDefect::UnparsableHeading {
            collection,
            heading: section.title_text(),
        });
        return None;
    };

    let qualified = format!("{owner}.{}", heading.name);
    let mut member = Member::new(heading.name, description(&section.body));
    member.platforms = platforms(&section.title);

    match collection.member_kind() {
        MemberKind::Method => {
            let (names, optional) = signature_parameters(&heading.signature);
            if !names.is_empty() {
                if let Some(items) = first_list(&section.body) {
                    member.parameters = parameters(
                        items,
                        &qualified,
                        Requirement::Tracked {
                            optional: &optional,
                        },
                        defects,
                    );
                }
            }
            member.signature = Some(heading.signature);
            member.signature_parameters = Some(names);

            if member.has_undocumented_parameters() {
                defects.push(ExtractionDefect::UndocumentedParameters {
                    member: qualified,
                    signature: member.signature.clone().unwrap_or_default(),
                });
            }
        }
        MemberKind::Event => {
            if let Some(items) = returns_list(&section.body) {
                member.returns = parameters(items, &qualified, Requirement::Untracked, defects);
            }
        }
        MemberKind::Property => {}
    }

    Some(member)
}

struct Heading {
    name: String,
    signature: String,
}

impl Heading {
    fn read(collection: Collection, title: &[Inline]) -> Option<Self> {
        match collection.member_kind() {
            MemberKind::Method => {
                let text = code_or_text(title);
                let open = text.find('(')?;
                let close = text.rfind(')')?;
                if close < open {
                    return None;
                }
                let name = last_segment(&text[..open]);
                (!name.is_empty()).then(|| Self {
                    name,
                    signature: text[open..=close].to_string(),
                })
            }
            MemberKind::Property => {
                let name = last_segment(&code_or_text(title));
                (!name.is_empty()).then(|| Self {
                    name,
                    signature: String::new(),
                })
            }
            MemberKind::Event => {
                let text = plain_text(title);
                let name = event_name(&text)?;
                Some(Self {
                    name,
                    signature: String::new(),
                })
            }
        }
    }
}

/// `Event: 'did-finish-load'` names `did-finish-load`. An unquoted name is taken up
/// to the first space.
fn event_name(title: &str) -> Option<String> {
    let rest = title.trim().strip_prefix("Event:")?.trim();
    let name = match rest.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let inner = &rest[1..];
            &inner[..inner.find(quote)?]
        }
        _ => rest.split_whitespace().next()?,
    };
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// The heading's first code span, else its plain text.
fn code_or_text(title: &[Inline]) -> String {
    title
        .iter()
        .find_map(|inline| match inline {
            Inline::Code(code) => Some(code.trim().to_string()),
            _ => None,
        })
        .unwrap_or_else(|| plain_text(title))
}

fn last_segment(path: &str) -> String {
    path.rsplit('.').next().unwrap_or(path).trim().to_string()
}

fn platforms(title: &[Inline]) -> Option<Vec<Platform>> {
    let mut found = Vec::new();
    for inline in title {
        if let Inline::Emphasis(content) = inline {
            for platform in Platform::parse_list(&plain_text(content)).unwrap_or_default() {
                if !found.contains(&platform) {
                    found.push(platform);
                }
            }
        }
    }
    (!found.is_empty()).then_some(found)
}

/// Bare names from `(width, height[, animate])`, and the subset written inside
/// brackets.
#[must_use]
pub fn signature_parameters(signature: &str) -> (Vec<String>, Vec<String>) {
    let inner = signature
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(signature);

    let mut names = Vec::new();
    let mut optional = Vec::new();
    let mut current = String::new();
    let mut bracketed = false;
    let mut depth = 0usize;

    let mut finish = |current: &mut String, bracketed: &mut bool| {
        if !current.is_empty() {
            if *bracketed {
                optional.push(current.clone());
            }
            names.push(std::mem::take(current));
        }
        *bracketed = false;
    };

    for c in inner.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' => finish(&mut current, &mut bracketed),
            c if c.is_whitespace() => {}
            c => {
                if depth > 0 {
                    bracketed = true;
                }
                current.push(c);
            }
        }
    }
    finish(&mut current, &mut bracketed);

    (names, optional)
}

/// Paragraphs that hold a `Process:` notice rather than prose.
#[must_use]
pub fn is_process_notice(inlines: &[Inline]) -> bool {
    plain_text(inlines).starts_with("Process:")
}

fn is_returns_marker(inlines: &[Inline]) -> bool {
    plain_text(inlines).starts_with("Returns:")
}

fn description(body: &[Block]) -> String {
    body.iter()
        .find_map(|block| match block {
            Block::Paragraph(inlines)
                if !is_returns_marker(inlines) && !is_process_notice(inlines) =>
            {
                Some(rich_text(inlines))
            }
            _ => None,
        })
        .unwrap_or_default()
}

fn first_list(body: &[Block]) -> Option<&[ListItem]> {
    body.iter().find_map(|block| match block {
        Block::List { items, .. } => Some(items.as_slice()),
        _ => None,
    })
}

fn returns_list(body: &[Block]) -> Option<&[ListItem]> {
    let marker = body
        .iter()
        .position(|block| matches!(block, Block::Paragraph(inlines) if is_returns_marker(inlines)))?;
    match body.get(marker + 1) {
        Some(Block::List { items, .. }) => Some(items.as_slice()),
        _ => None,
    }
}
