//! API assembly: turn one surface into a built, validated [`Api`].

use doclint_core::{
    Api, ApiBuilder, Process, RecordValidator, SlugAliases, UrlTemplates, Verdict,
};

use crate::extract::{self, is_process_notice};
use crate::markdown::{Block, Inline, plain_text, rich_text};
use crate::segment::Surface;

/// Everything a surface needs besides its own markdown.
#[derive(Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub version: &'a str,
    pub aliases: &'a SlugAliases,
    pub urls: &'a UrlTemplates,
    pub validator: &'a dyn RecordValidator,
}

/// Build the record for one surface. Defects found on the way are attached to the
/// record, never returned.
#[must_use]
pub fn assemble(surface: &Surface<'_>, ctx: &AssemblyContext<'_>) -> Api {
    let mut builder = ApiBuilder::new(surface.name.clone(), surface.kind, ctx.version)
        .description(surface_description(surface))
        .process(surface_process(surface));

    for defect in &surface.defects {
        builder.defect(defect.to_string());
    }

    for (collection, section) in &surface.sections {
        for child in &section.children {
            let mut defects = Vec::new();
            let member = extract::member(*collection, child, &surface.name, &mut defects);
            for defect in defects {
                builder.defect(defect.to_string());
            }
            if let Some(member) = member {
                builder.member(*collection, member);
            }
        }
    }

    let api = builder.build(ctx.aliases, ctx.urls, ctx.validator);
    tracing::debug!(
        api = api.name(),
        kind = %api.kind(),
        errors = api.collection_errors().len(),
        "assembled"
    );
    api
}

/// The first block quote, else the first ordinary paragraph. A class that stands
/// for the whole document falls back to the document's own introduction.
fn surface_description(surface: &Surface<'_>) -> String {
    let found = blocks_description(surface.body);
    if found.is_empty() && surface.merged {
        blocks_description(surface.preamble)
    } else {
        found
    }
}

fn blocks_description(blocks: &[Block]) -> String {
    let quoted = blocks.iter().find_map(|block| match block {
        Block::Quote(inner) => inner.iter().find_map(|b| match b {
            Block::Paragraph(inlines) => Some(rich_text(inlines)),
            _ => None,
        }),
        _ => None,
    });

    quoted
        .or_else(|| {
            blocks.iter().find_map(|block| match block {
                Block::Paragraph(inlines) if !is_process_notice(inlines) => {
                    Some(rich_text(inlines))
                }
                _ => None,
            })
        })
        .unwrap_or_default()
}

/// A `Process:` notice in the surface body, else in the document preamble.
fn surface_process(surface: &Surface<'_>) -> Process {
    notice(surface.body)
        .or_else(|| notice(surface.preamble))
        .map(|text| Process {
            main: text.contains("Main"),
            renderer: text.contains("Renderer"),
        })
        .unwrap_or_default()
}

fn notice(blocks: &[Block]) -> Option<String> {
    blocks.iter().find_map(|block| match block {
        Block::Paragraph(inlines) if is_process_notice(inlines) => Some(notice_text(inlines)),
        _ => None,
    })
}

fn notice_text(inlines: &[Inline]) -> String {
    plain_text(inlines)
        .trim_start_matches("Process:")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse;
    use crate::segment::{outline, surfaces};
    use doclint_core::{AcceptAll, ApiType};
    use pretty_assertions::assert_eq;

    fn assemble_all(src: &str, stem: &str) -> Vec<Api> {
        let aliases = SlugAliases::default();
        let urls = UrlTemplates::default();
        let ctx = AssemblyContext {
            version: "1.4.1",
            aliases: &aliases,
            urls: &urls,
            validator: &AcceptAll,
        };
        let root = outline(parse(src));
        surfaces(&root, stem)
            .iter()
            .map(|surface| assemble(surface, &ctx))
            .collect()
    }

    #[test]
    fn class_document_is_assembled_with_urls() {
        let src = "# BrowserWindow\n\n> Create and control browser windows.\n\nProcess: [Main](../glossary.md#main-process)\n\n## Class: BrowserWindow\n\n### Instance Properties\n\n#### `win.id`\n\nThe unique ID of the window.\n";
        let apis = assemble_all(src, "browser-window");
        assert_eq!(apis.len(), 1);
        let api = &apis[0];
        assert_eq!(api.name(), "BrowserWindow");
        assert_eq!(api.kind(), ApiType::Class);
        assert_eq!(api.slug(), "browser-window");
        assert_eq!(api.description(), "Create and control browser windows.");
        assert_eq!(api.process(), Process { main: true, renderer: false });
        assert_eq!(
            api.repo_url(),
            "https://github.com/electron/electron/blob/v1.4.1/docs/api/browser-window.md"
        );
        assert!(api.instance_properties().contains("id"));
        assert!(api.valid(), "{:?}", api.collection_errors());
    }

    #[test]
    fn process_defaults_to_neither() {
        let apis = assemble_all("# shell\n\n> Manage files.\n", "shell");
        assert_eq!(apis[0].process(), Process::default());
    }

    #[test]
    fn embedded_class_inherits_preamble_process() {
        let src = "# session\n\n> Manage browser sessions.\n\nProcess: Main\n\n## Class: Cookies\n\n> Query and modify cookies.\n";
        let apis = assemble_all(src, "session");
        assert_eq!(apis.len(), 2);
        assert_eq!(apis[1].name(), "Cookies");
        assert_eq!(apis[1].description(), "Query and modify cookies.");
        assert!(apis[1].process().main);
    }

    #[test]
    fn duplicate_members_and_defects_are_reported_in_order() {
        let src = "# app\n\n> Control the app.\n\n## Methods\n\n### `app.quit()`\n\nQuits.\n\n### `app.focus`\n\n### `app.quit()`\n\nAgain.\n";
        let apis = assemble_all(src, "app");
        let api = &apis[0];
        assert_eq!(
            api.collection_errors(),
            [
                "unable to parse methods heading 'app.focus'".to_string(),
                "duplicate methods member 'quit'".to_string(),
            ]
        );
        assert_eq!(api.methods().len(), 1);
        assert_eq!(api.methods()[0].description, "Quits.");
        assert!(!api.valid());
    }
}
