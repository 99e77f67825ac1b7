//! Walk-driven Freeplane emitter.
//!
//! The emitter is a [`Visitor`]: the walker calls it once per node on the way
//! down and once on the way back up, and it appends XML to the output sink.
//! Nothing already written is ever revisited, so every open tag must be paired
//! by construction:
//!
//! - headings: the [`HeadingStack`] decides how many heading nodes a new heading
//!   closes; the document's leave event closes the rest
//! - list items: the first paragraph of an item opens the item's node, the item
//!   closes it; items without a paragraph open nothing
//! - block quotes: one node, everything inside is delegated to the HTML
//!   fragments (so headings and lists in a quote never touch the bookkeeping)
//! - code, HTML blocks, thematic breaks, tables: self-contained nodes

use super::compact::{extract_compact, is_compact};
use crate::common::heading_stack::HeadingStack;
use crate::common::walk::{Visitor, WalkStatus};
use crate::error::ConvertError;
use crate::formats::{escape_xml, replace_invalid_xml_chars};
use crate::formats::html::{render_fragment, write_code_block};
use crate::formats::markdown::{heading_level, literal, raw_name, NodeKind};
use crate::options::ConvertOptions;
use comrak::nodes::AstNode;
use std::io::Write;
use tracing::trace;

const WRAPPER_OPEN: &[u8] = b"<node><richcontent TYPE=\"NODE\"><html><body>";
const WRAPPER_BODY_CLOSE: &[u8] = b"</body></html></richcontent>";
const WRAPPER_CLOSE: &[u8] = b"</body></html></richcontent></node>";
const NODE_CLOSE: &[u8] = b"</node>";

/// Per-item bookkeeping: whether a paragraph has opened the item's node yet.
#[derive(Debug, Default)]
struct ItemFrame {
    node_open: bool,
}

/// Stateful visitor writing one mind map.
///
/// All state lives in the instance, so a fresh emitter is needed per
/// conversion; see [`render_mind_map`](super::render_mind_map).
pub struct MindMapEmitter<'o, W: Write> {
    out: W,
    options: &'o ConvertOptions,
    headings: HeadingStack,
    /// Set while a compact paragraph is open; suppresses HTML delegation.
    compact: bool,
    /// Whether the open paragraph must close its own `<node>` on leave.
    paragraph_closes_node: bool,
    items: Vec<ItemFrame>,
    quote_depth: usize,
}

impl<'o, W: Write> MindMapEmitter<'o, W> {
    pub fn new(out: W, options: &'o ConvertOptions) -> Self {
        MindMapEmitter {
            out,
            options,
            headings: HeadingStack::new(),
            compact: false,
            paragraph_closes_node: false,
            items: Vec::new(),
            quote_depth: 0,
        }
    }

    /// Number of heading nodes currently open.
    pub fn heading_depth(&self) -> usize {
        self.headings.depth()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), ConvertError> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    fn delegate<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        kind: NodeKind,
        entering: bool,
    ) -> Result<WalkStatus, ConvertError> {
        if self.compact {
            return Ok(WalkStatus::Continue);
        }
        Ok(render_fragment(&mut self.out, node, kind, entering)?)
    }

    fn document(&mut self, entering: bool) -> Result<(), ConvertError> {
        if entering {
            let header = format!(
                "<map version=\"{}\"><node TEXT=\"{}\">",
                escape_xml(&self.options.map_version),
                escape_xml(&self.options.root_text)
            );
            self.emit(header.as_bytes())
        } else {
            for _ in 0..self.headings.close_all() {
                self.emit(NODE_CLOSE)?;
            }
            self.emit(b"</node></map>")
        }
    }

    fn heading<'a>(&mut self, node: &'a AstNode<'a>, entering: bool) -> Result<(), ConvertError> {
        // Only top-level headings shape the outline; a heading inside a list
        // item is an ordinary rich node.
        let outline = parent_kind(node) == Some(NodeKind::Document);

        if entering {
            if outline {
                let level = heading_level(node).unwrap_or(1);
                let closed = self.headings.open(level);
                trace!(level, closed, "heading opened");
                for _ in 0..closed {
                    self.emit(NODE_CLOSE)?;
                }
            }
            self.emit(WRAPPER_OPEN)?;
            render_fragment(&mut self.out, node, NodeKind::Heading, true)?;
        } else {
            render_fragment(&mut self.out, node, NodeKind::Heading, false)?;
            self.emit(if outline { WRAPPER_BODY_CLOSE } else { WRAPPER_CLOSE })?;
        }
        Ok(())
    }

    fn paragraph<'a>(&mut self, node: &'a AstNode<'a>, entering: bool) -> Result<(), ConvertError> {
        if !entering {
            if !self.compact {
                render_fragment(&mut self.out, node, NodeKind::Paragraph, false)?;
                self.emit(WRAPPER_BODY_CLOSE)?;
            }
            if self.paragraph_closes_node {
                self.emit(NODE_CLOSE)?;
            }
            self.compact = false;
            self.paragraph_closes_node = false;
            return Ok(());
        }

        self.paragraph_closes_node = match parent_kind(node) {
            Some(NodeKind::Document) => true,
            Some(NodeKind::Item) => match self.items.last_mut() {
                Some(frame) if !frame.node_open => {
                    frame.node_open = true;
                    false
                }
                _ => true,
            },
            other => {
                return Err(ConvertError::UnexpectedParent {
                    node: NodeKind::Paragraph.name().to_string(),
                    parent: other.map_or("none", NodeKind::name).to_string(),
                })
            }
        };

        if is_compact(node) {
            self.compact = true;
            let compact = extract_compact(node);
            let tag = match compact.link {
                Some(link) => format!(
                    "<node TEXT=\"{}\" LINK=\"{}\">",
                    escape_xml(&compact.text),
                    escape_xml(&link)
                ),
                None => format!("<node TEXT=\"{}\">", escape_xml(&compact.text)),
            };
            self.emit(tag.as_bytes())
        } else {
            self.emit(WRAPPER_OPEN)?;
            render_fragment(&mut self.out, node, NodeKind::Paragraph, true)?;
            Ok(())
        }
    }

    fn item(&mut self, entering: bool) -> Result<(), ConvertError> {
        if entering {
            self.items.push(ItemFrame::default());
            return Ok(());
        }
        match self.items.pop() {
            Some(frame) if frame.node_open => self.emit(NODE_CLOSE),
            _ => Ok(()),
        }
    }

    fn block_quote<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        entering: bool,
    ) -> Result<(), ConvertError> {
        if entering {
            self.quote_depth += 1;
            if self.quote_depth == 1 {
                self.emit(WRAPPER_OPEN)?;
            } else {
                render_fragment(&mut self.out, node, NodeKind::BlockQuote, true)?;
            }
        } else {
            self.quote_depth -= 1;
            if self.quote_depth == 0 {
                self.emit(WRAPPER_CLOSE)?;
            } else {
                render_fragment(&mut self.out, node, NodeKind::BlockQuote, false)?;
            }
        }
        Ok(())
    }
}

impl<'a, 'o, W: Write> Visitor<'a> for MindMapEmitter<'o, W> {
    type Error = ConvertError;

    fn visit(&mut self, node: &'a AstNode<'a>, entering: bool) -> Result<WalkStatus, ConvertError> {
        let Some(kind) = NodeKind::of(node) else {
            let name = raw_name(node);
            trace!(node = %name, "unsupported node");
            return Err(ConvertError::UnsupportedNode(name));
        };

        if self.quote_depth > 0 && kind != NodeKind::BlockQuote {
            return Ok(render_fragment(&mut self.out, node, kind, entering)?);
        }

        match kind {
            NodeKind::Document => self.document(entering)?,
            NodeKind::Heading => self.heading(node, entering)?,
            NodeKind::Paragraph => self.paragraph(node, entering)?,
            NodeKind::List => {}
            NodeKind::Item => self.item(entering)?,
            NodeKind::BlockQuote => self.block_quote(node, entering)?,
            NodeKind::Emph
            | NodeKind::Strong
            | NodeKind::Strikethrough
            | NodeKind::Link
            | NodeKind::Image
            | NodeKind::Text
            | NodeKind::Code
            | NodeKind::HtmlInline
            | NodeKind::TableRow
            | NodeKind::TableCell => return self.delegate(node, kind, entering),
            NodeKind::SoftBreak | NodeKind::LineBreak => {
                if entering && !self.compact {
                    self.emit(b"<br />")?;
                }
            }
            NodeKind::CodeBlock => {
                if entering {
                    self.emit(WRAPPER_OPEN)?;
                    write_code_block(&mut self.out, node)?;
                    self.emit(WRAPPER_CLOSE)?;
                }
            }
            NodeKind::HtmlBlock => {
                if entering {
                    self.emit(WRAPPER_OPEN)?;
                    self.emit(replace_invalid_xml_chars(&literal(node)).as_bytes())?;
                    self.emit(WRAPPER_CLOSE)?;
                }
            }
            NodeKind::ThematicBreak => {
                if entering {
                    self.emit(WRAPPER_OPEN)?;
                    self.emit(b"<hr />")?;
                    self.emit(WRAPPER_CLOSE)?;
                }
            }
            NodeKind::Table => {
                if entering {
                    self.emit(WRAPPER_OPEN)?;
                    self.emit(b"<table>")?;
                } else {
                    self.emit(b"</table>")?;
                    self.emit(WRAPPER_CLOSE)?;
                }
            }
        }

        Ok(WalkStatus::Continue)
    }
}

fn parent_kind(node: &AstNode<'_>) -> Option<NodeKind> {
    node.parent().and_then(|parent| NodeKind::of(parent))
}
