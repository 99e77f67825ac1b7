//! Freeplane mind map output
//!
//! Produces a Freeplane 1.8 `.mm` document from a Markdown AST:
//!
//! ```text
//! <map version="freeplane 1.8.0">
//!   <node TEXT="Result">
//!     <node><richcontent TYPE="NODE"><html><body><h1>Title</h1></body></html></richcontent>
//!       <node TEXT="Plain paragraph"></node>
//!       <node TEXT="Docs" LINK="http://x"></node>
//!     </node>
//!   </node>
//! </map>
//! ```
//!
//! (Whitespace added for readability; the emitter writes no indentation.)
//!
//! # Element Mapping Table
//!
//! | Markdown       | Mind map                                                  |
//! |----------------|-----------------------------------------------------------|
//! | Heading        | rich node; later content nests under it until a heading of the same or higher rank |
//! | Paragraph      | compact node (`TEXT`/`LINK`) or rich node                 |
//! | List           | nothing, the items hang from the enclosing node           |
//! | List item      | the node of its first paragraph, nested lists as children |
//! | Block quote    | one rich node, whole quote rendered as HTML               |
//! | Code block     | rich node with `<pre><code>`                              |
//! | HTML block     | rich node with the raw HTML                               |
//! | Table          | rich node with an HTML `<table>`                          |
//! | Thematic break | rich node with `<hr />`                                   |
//!
//! A paragraph is compact when, ignoring empty text, it holds a single text
//! node or a single link around a single text node. Everything else goes
//! through the HTML fragments in [`crate::formats::html`].
//!
//! `<node>` elements are always balanced. Text and attributes are escaped and
//! characters XML cannot carry become U+FFFD, but raw HTML from the document
//! is copied as is, so a map is only well-formed XML if that HTML is.
//!
//! # Lossy Conversion
//!
//! Mind maps cannot hold everything Markdown can: list markers and numbering,
//! blank lines, setext vs ATX headings and reference definitions are lost.
//! There is no way back from a mind map to the original Markdown.

pub mod compact;
pub mod emitter;

pub use compact::{extract_compact, is_compact, CompactNode};
pub use emitter::MindMapEmitter;

use crate::common::walk::walk;
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use comrak::nodes::AstNode;
use std::io::Write;

/// Render the mind map for an already parsed document into `out`.
///
/// Output is written while walking; on error `out` may hold a partial map, so
/// callers that must not expose partial output should render into a buffer.
pub fn render_mind_map<'a, W: Write>(
    root: &'a AstNode<'a>,
    options: &ConvertOptions,
    out: W,
) -> Result<W, ConvertError> {
    let mut emitter = MindMapEmitter::new(out, options);
    walk(root, &mut emitter)?;
    let mut out = emitter.into_inner();
    out.flush()?;
    Ok(out)
}
