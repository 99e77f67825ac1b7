//! Depth-first enter/leave traversal over the comrak AST.
//!
//! The walker delivers every node twice: once on the way down (`entering ==
//! true`) and once on the way back up. A visitor may answer the enter event
//! with [`WalkStatus::SkipChildren`] when it has already rendered the whole
//! subtree itself (images flatten their alt text this way); the leave event is
//! still delivered for skipped nodes so open/close pairs stay symmetric.
//!
//! Traversal is iterative (comrak's `traverse`), so deeply nested quotes or
//! lists cannot exhaust the call stack.

use comrak::arena_tree::NodeEdge;
use comrak::nodes::AstNode;

/// What the walker should do after an enter event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Descend into the children as usual
    Continue,
    /// Jump straight to this node's leave event
    SkipChildren,
}

/// Receives enter/leave events from [`walk`].
pub trait Visitor<'a> {
    type Error;

    fn visit(&mut self, node: &'a AstNode<'a>, entering: bool)
        -> Result<WalkStatus, Self::Error>;
}

/// Walk `root` depth-first, stopping at the first error the visitor returns.
pub fn walk<'a, V>(root: &'a AstNode<'a>, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor<'a>,
{
    let mut skipping: Option<&'a AstNode<'a>> = None;

    for edge in root.traverse() {
        match edge {
            NodeEdge::Start(node) => {
                if skipping.is_some() {
                    continue;
                }
                if visitor.visit(node, true)? == WalkStatus::SkipChildren {
                    skipping = Some(node);
                }
            }
            NodeEdge::End(node) => {
                if let Some(skipped) = skipping {
                    if !std::ptr::eq(skipped, node) {
                        continue;
                    }
                    skipping = None;
                }
                visitor.visit(node, false)?;
            }
        }
    }

    Ok(())
}
