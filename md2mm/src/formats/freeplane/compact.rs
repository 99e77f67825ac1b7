//! Compact node detection and extraction.
//!
//! A paragraph whose content is nothing but plain text, or a single link
//! around plain text, is written as `<node TEXT=".." LINK="..">` instead of a
//! `richcontent` body. Freeplane shows such nodes as ordinary editable text and
//! makes the link clickable, which is what most bullet-point notes want.

use crate::formats::markdown::{destination, literal, NodeKind};
use comrak::nodes::AstNode;

/// Text and optional link of a compact node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompactNode {
    pub text: String,
    pub link: Option<String>,
}

/// Children of `node`, ignoring text nodes without a literal.
fn significant_children<'a>(node: &'a AstNode<'a>) -> Vec<&'a AstNode<'a>> {
    node.children()
        .filter(|child| NodeKind::of(child) != Some(NodeKind::Text) || !literal(child).is_empty())
        .collect()
}

fn is_single_text<'a>(node: &'a AstNode<'a>) -> bool {
    NodeKind::of(node) == Some(NodeKind::Text) && significant_children(node).is_empty()
}

fn is_single_link<'a>(node: &'a AstNode<'a>) -> bool {
    if NodeKind::of(node) != Some(NodeKind::Link) {
        return false;
    }
    let children = significant_children(node);
    children.len() == 1 && NodeKind::of(children[0]) == Some(NodeKind::Text)
}

/// Whether `node` (a paragraph) can be written in the compact form.
pub fn is_compact<'a>(node: &'a AstNode<'a>) -> bool {
    let children = significant_children(node);
    children.len() == 1 && (is_single_text(children[0]) || is_single_link(children[0]))
}

/// Walk the leftmost spine below each child of `node`, collecting text
/// literals and the deepest link destination.
pub fn extract_compact<'a>(node: &'a AstNode<'a>) -> CompactNode {
    let mut compact = CompactNode::default();

    for child in node.children() {
        let mut current = Some(child);
        while let Some(spine) = current {
            compact.text.push_str(&literal(spine));
            if let Some(url) = destination(spine).filter(|url| !url.is_empty()) {
                compact.link = Some(url);
            }
            current = spine.first_child();
        }
    }

    compact
}
