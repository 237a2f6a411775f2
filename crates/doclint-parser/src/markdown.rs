//! Markdown tree built from the `pulldown-cmark` event stream.
//!
//! The tree keeps only what API docs are written with: headings, paragraphs, lists,
//! block quotes, and code blocks, with inline text, code spans, emphasis, and links.
//! Inline content written directly inside a tight list item is wrapped in an implicit
//! paragraph, so every list item that has text starts with a [`Block::Paragraph`].

use pulldown_cmark::{Event, Options, Parser, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Link { url: String, content: Vec<Inline> },
    Html(String),
    Break,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    List { ordered: bool, items: Vec<ListItem> },
    Quote(Vec<Block>),
    Code(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

impl ListItem {
    /// Inline content of the item's leading paragraph.
    #[must_use]
    pub fn lead(&self) -> &[Inline] {
        match self.blocks.first() {
            Some(Block::Paragraph(inlines)) => inlines,
            _ => &[],
        }
    }

    /// Items of the first list nested in this item.
    #[must_use]
    pub fn nested(&self) -> Option<&[ListItem]> {
        self.blocks.iter().find_map(|block| match block {
            Block::List { items, .. } => Some(items.as_slice()),
            _ => None,
        })
    }
}

/// Parse CommonMark text into a block tree.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    let mut tree = TreeBuilder::new();
    for event in Parser::new_ext(text, Options::empty()) {
        tree.push(event);
    }
    tree.finish()
}

/// Flatten inlines to text. Code spans lose their backticks; whitespace outside
/// code spans is collapsed.
#[must_use]
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = Flattened::new(false);
    out.inlines(inlines);
    out.text
}

/// Flatten inlines to text, keeping code spans verbatim with their backticks.
/// Emphasis, strong, and link wrappers are dropped; raw HTML is removed.
#[must_use]
pub fn rich_text(inlines: &[Inline]) -> String {
    let mut out = Flattened::new(true);
    out.inlines(inlines);
    out.text
}

/// Flattening state: runs of whitespace in prose become one space, code spans are
/// copied as written, and leading or trailing whitespace is dropped.
struct Flattened {
    text: String,
    backticks: bool,
    pending_space: bool,
}

impl Flattened {
    const fn new(backticks: bool) -> Self {
        Self {
            text: String::new(),
            backticks,
            pending_space: false,
        }
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            match inline {
                Inline::Text(text) => self.prose(text),
                Inline::Code(code) => self.code(code),
                Inline::Emphasis(content)
                | Inline::Strong(content)
                | Inline::Link { content, .. } => self.inlines(content),
                Inline::Html(_) => {}
                Inline::Break => self.pending_space = true,
            }
        }
    }

    fn prose(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = true;
            } else {
                self.flush_space();
                self.text.push(ch);
            }
        }
    }

    fn code(&mut self, code: &str) {
        self.flush_space();
        if self.backticks {
            self.text.push('`');
            self.text.push_str(code);
            self.text.push('`');
        } else {
            self.text.push_str(code);
        }
    }

    fn flush_space(&mut self) {
        if self.pending_space && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.pending_space = false;
    }
}

// ---------------------------------------------------------------------------
// Event stream folding
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Root,
    Item,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Span {
    Heading(u8),
    Paragraph,
    Implicit,
    Emphasis,
    Strong,
    Link(String),
    Passthrough,
}

#[derive(Debug)]
enum Frame {
    Blocks { kind: Container, blocks: Vec<Block> },
    List { ordered: bool, items: Vec<ListItem> },
    Inlines { kind: Span, inlines: Vec<Inline> },
    Code(String),
    Skip,
}

impl Frame {
    const fn inlines(kind: Span) -> Self {
        Self::Inlines {
            kind,
            inlines: Vec::new(),
        }
    }

    const fn is_inline_span(&self) -> bool {
        matches!(
            self,
            Self::Inlines {
                kind: Span::Emphasis | Span::Strong | Span::Link(_) | Span::Passthrough,
                ..
            }
        )
    }
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::Blocks {
                kind: Container::Root,
                blocks: Vec::new(),
            }],
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline(Inline::Code(code.into_string())),
            Event::InlineHtml(html) | Event::Html(html) => self.html(html.into_string()),
            Event::SoftBreak | Event::HardBreak => self.inline(Inline::Break),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::inlines(Span::Paragraph),
            Tag::Heading { level, .. } => Frame::inlines(Span::Heading(level as u8)),
            Tag::BlockQuote(_) => Frame::Blocks {
                kind: Container::Quote,
                blocks: Vec::new(),
            },
            Tag::CodeBlock(_) => Frame::Code(String::new()),
            Tag::HtmlBlock => Frame::Skip,
            Tag::List(start) => Frame::List {
                ordered: start.is_some(),
                items: Vec::new(),
            },
            Tag::Item => Frame::Blocks {
                kind: Container::Item,
                blocks: Vec::new(),
            },
            Tag::Emphasis => Frame::inlines(Span::Emphasis),
            Tag::Strong => Frame::inlines(Span::Strong),
            Tag::Link { dest_url, .. } => Frame::inlines(Span::Link(dest_url.into_string())),
            _ => Frame::inlines(Span::Passthrough),
        };

        if frame.is_inline_span() {
            self.open_implicit();
        } else {
            self.close_implicit();
        }
        self.stack.push(frame);
    }

    fn end(&mut self) {
        // Implicit paragraphs never receive their own end event.
        self.close_implicit();
        if self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                self.attach(frame);
            }
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Code(code)) => code.push_str(text),
            Some(Frame::Skip) => {}
            _ => self.inline(Inline::Text(text.to_string())),
        }
    }

    fn html(&mut self, html: String) {
        if !matches!(self.stack.last(), Some(Frame::Skip)) {
            self.inline(Inline::Html(html));
        }
    }

    fn inline(&mut self, inline: Inline) {
        self.open_implicit();
        if let Some(Frame::Inlines { inlines, .. }) = self.stack.last_mut() {
            if let (Inline::Text(next), Some(Inline::Text(prev))) = (&inline, inlines.last_mut()) {
                prev.push_str(next);
                return;
            }
            inlines.push(inline);
        }
    }

    fn block(&mut self, block: Block) {
        self.close_implicit();
        if let Some(Frame::Blocks { blocks, .. }) = self.stack.last_mut() {
            blocks.push(block);
        }
    }

    fn open_implicit(&mut self) {
        if matches!(self.stack.last(), Some(Frame::Blocks { .. })) {
            self.stack.push(Frame::inlines(Span::Implicit));
        }
    }

    fn close_implicit(&mut self) {
        if matches!(
            self.stack.last(),
            Some(Frame::Inlines {
                kind: Span::Implicit,
                ..
            })
        ) {
            if let Some(Frame::Inlines { inlines, .. }) = self.stack.pop() {
                if !inlines.is_empty() {
                    self.block(Block::Paragraph(inlines));
                }
            }
        }
    }

    fn attach(&mut self, frame: Frame) {
        match frame {
            Frame::Blocks {
                kind: Container::Item,
                blocks,
            } => {
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(ListItem { blocks });
                }
            }
            Frame::Blocks {
                kind: Container::Quote,
                blocks,
            } => self.block(Block::Quote(blocks)),
            Frame::Blocks {
                kind: Container::Root,
                ..
            }
            | Frame::Skip => {}
            Frame::List { ordered, items } => self.block(Block::List { ordered, items }),
            Frame::Code(code) => self.block(Block::Code(code)),
            Frame::Inlines { kind, inlines } => match kind {
                Span::Heading(level) => self.block(Block::Heading {
                    level,
                    content: inlines,
                }),
                Span::Paragraph | Span::Implicit => self.block(Block::Paragraph(inlines)),
                Span::Emphasis => self.inline(Inline::Emphasis(inlines)),
                Span::Strong => self.inline(Inline::Strong(inlines)),
                Span::Link(url) => self.inline(Inline::Link {
                    url,
                    content: inlines,
                }),
                Span::Passthrough => {
                    for inline in inlines {
                        self.inline(inline);
                    }
                }
            },
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_implicit();
        while self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                self.attach(frame);
            }
            self.close_implicit();
        }
        match self.stack.pop() {
            Some(Frame::Blocks { blocks, .. }) => blocks,
            _ => Vec::new(),
        }
    }
}
