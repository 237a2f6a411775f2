//! Section segmenter.
//!
//! Builds the heading outline of a document and splits it into API surfaces: the
//! module named by the top heading and every `Class: <Name>` declaration. Each
//! surface carries the labeled collection sections (`Methods`, `Instance Events`, ...)
//! found directly under its heading. Unlabeled headings are ignored.

use doclint_core::{ApiType, Collection};

use crate::error::ExtractionDefect;
use crate::markdown::{Block, Inline, plain_text};

/// A heading together with the blocks up to the next heading of the same or a
/// higher level. The root section has level 0 and no title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub title: Vec<Inline>,
    pub body: Vec<Block>,
    pub children: Vec<Section>,
}

impl Section {
    #[must_use]
    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }

    /// First section in document order (this one included) matching `pred`.
    fn find(&self, pred: &dyn Fn(&Self) -> bool) -> Option<&Self> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }
}

/// Fold a flat block sequence into a heading tree.
#[must_use]
pub fn outline(blocks: Vec<Block>) -> Section {
    let mut stack = vec![Section::default()];

    for block in blocks {
        match block {
            Block::Heading { level, content } => {
                while stack.len() > 1 && stack.last().is_some_and(|s| s.level >= level) {
                    close_last(&mut stack);
                }
                stack.push(Section {
                    level,
                    title: content,
                    body: Vec::new(),
                    children: Vec::new(),
                });
            }
            other => {
                if let Some(current) = stack.last_mut() {
                    current.body.push(other);
                }
            }
        }
    }

    while stack.len() > 1 {
        close_last(&mut stack);
    }
    stack.pop().unwrap_or_default()
}

fn close_last(stack: &mut Vec<Section>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}

/// The document's top heading: the first H1, else the first H2.
#[must_use]
pub fn top_section(root: &Section) -> Option<&Section> {
    root.find(&|s| s.level == 1)
        .or_else(|| root.find(&|s| s.level == 2))
}

/// One module or class declared by a document.
#[derive(Debug)]
pub struct Surface<'a> {
    pub name: String,
    pub kind: ApiType,
    /// Blocks directly under the declaring heading.
    pub body: &'a [Block],
    /// Blocks under the document's top heading, consulted when `body` lacks a
    /// process notice. Empty for the module surface itself.
    pub preamble: &'a [Block],
    /// True when a class shares its name with the document's top heading and
    /// takes over the module declaration.
    pub merged: bool,
    pub sections: Vec<(Collection, &'a Section)>,
    pub defects: Vec<ExtractionDefect>,
}

/// Split a document outline into API surfaces, module first, then classes in
/// heading order. `stem` is the file stem, used when the top heading is not an
/// identifier.
#[must_use]
pub fn surfaces<'a>(root: &'a Section, stem: &str) -> Vec<Surface<'a>> {
    let Some(top) = top_section(root) else {
        return vec![Surface {
            name: camel_case(stem),
            kind: ApiType::Module,
            body: &root.body,
            preamble: &[],
            merged: false,
            sections: Vec::new(),
            defects: vec![ExtractionDefect::MissingDeclaration],
        }];
    };

    let mut classes = Vec::new();
    collect_classes(root, &mut classes);

    let top_title = top.title_text();
    let module_name = module_name(&top_title, stem);
    let top_is_class = class_name(&top_title).is_some();
    let module_merged = classes.iter().any(|(_, name)| *name == module_name);

    let mut out = Vec::with_capacity(classes.len() + 1);
    if !top_is_class && !module_merged {
        out.push(Surface {
            name: module_name.clone(),
            kind: ApiType::Module,
            body: &top.body,
            preamble: &[],
            merged: false,
            sections: labeled_sections(top),
            defects: Vec::new(),
        });
    }

    for (section, name) in classes {
        let merged = !top_is_class && name == module_name;
        let mut sections = labeled_sections(section);
        if merged {
            sections.extend(labeled_sections(top));
        }
        out.push(Surface {
            name,
            kind: ApiType::Class,
            body: &section.body,
            preamble: if std::ptr::eq(section, top) {
                &[]
            } else {
                &top.body
            },
            merged,
            sections,
            defects: Vec::new(),
        });
    }

    out
}

/// Class declarations in document order. Classes nested inside a class are not
/// separate surfaces.
fn collect_classes<'a>(section: &'a Section, out: &mut Vec<(&'a Section, String)>) {
    for child in &section.children {
        if let Some(name) = class_name(&child.title_text()) {
            out.push((child, name));
        } else {
            collect_classes(child, out);
        }
    }
}

fn labeled_sections(section: &Section) -> Vec<(Collection, &Section)> {
    section
        .children
        .iter()
        .filter_map(|child| Collection::from_label(&child.title_text()).map(|c| (c, child)))
        .collect()
}

/// `Class: BrowserWindow extends EventEmitter` names `BrowserWindow`.
#[must_use]
pub fn class_name(title: &str) -> Option<String> {
    let rest = title.trim().strip_prefix("Class:")?;
    rest.split_whitespace().next().map(ToString::to_string)
}

/// The top heading when it is an identifier, else the file stem in lower camel case.
fn module_name(title: &str, stem: &str) -> String {
    let is_identifier = !title.is_empty()
        && title
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        title.to_string()
    } else {
        camel_case(stem)
    }
}

/// `web-contents` → `webContents`.
#[must_use]
pub fn camel_case(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut upper_next = false;
    for c in stem.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
