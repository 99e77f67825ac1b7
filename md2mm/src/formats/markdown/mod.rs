//! Markdown input
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing:
//! - CommonMark compliant, with the GFM extensions we need (tables, strikethrough, autolinks)
//! - Arena-allocated AST with parent links, which the emitter needs for
//!   context-dependent closing
//! - Iterative enter/leave traversal out of the box
//!
//! # Backslashes
//!
//! Mind maps are mostly written by hand and backslashes in them are meant
//! literally (Windows paths, LaTeX snippets). By default every `\` in the
//! source is doubled before parsing, so CommonMark's escape handling turns it
//! back into a single literal backslash instead of swallowing it.
//! See [`escape_backslashes`].

pub mod node;

pub use node::{
    destination, heading_level, is_header_row, is_in_tight_list, literal, ordered_start,
    raw_name, table_cell_info, title, NodeKind,
};

use crate::options::MarkdownExtensions;
use comrak::nodes::AstNode;
use comrak::{parse_document, Arena, Options};

/// Double every backslash so it survives Markdown escape processing.
pub fn escape_backslashes(source: &str) -> String {
    source.replace('\\', "\\\\")
}

/// Parse Markdown into a comrak AST allocated in `arena`.
pub fn parse_markdown<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    extensions: &MarkdownExtensions,
) -> &'a AstNode<'a> {
    let options = comrak_options(extensions);
    parse_document(arena, source, &options)
}

fn comrak_options(extensions: &MarkdownExtensions) -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = extensions.table;
    options.extension.strikethrough = extensions.strikethrough;
    options.extension.autolink = extensions.autolink;
    options
}
