//! HTML fragments for `richcontent` bodies
//!
//! Freeplane stores formatted node text as an XHTML body. Instead of rendering
//! whole subtrees, [`render_fragment`] writes the opening fragment of a node on
//! the enter event and the closing fragment on the leave event, so the
//! mind map emitter can interleave its own `<node>` bookkeeping with delegated
//! content during a single walk.
//!
//! Output is XHTML: void elements self-close (`<br />`, `<hr />`, `<img />`)
//! and all text and attribute values are escaped. The only unescaped content
//! is raw HTML coming from the document itself (HTML blocks and inline HTML).
//!
//! | Node          | Enter                              | Leave                 |
//! |---------------|------------------------------------|-----------------------|
//! | Heading       | `<hN>`                             | `</hN>`               |
//! | Paragraph     | `<p>` (nothing in tight lists)     | `</p>`                |
//! | List          | `<ul>` / `<ol>` / `<ol start="n">` | `</ul>` / `</ol>`     |
//! | Item          | `<li>`                             | `</li>`               |
//! | BlockQuote    | `<blockquote>`                     | `</blockquote>`       |
//! | Emph/Strong   | `<em>` / `<strong>`                | `</em>` / `</strong>` |
//! | Strikethrough | `<del>`                            | `</del>`              |
//! | Link          | `<a href=".." title="..">`         | `</a>`                |
//! | Image         | `<img src=".." alt=".." />`        | (children skipped)    |
//! | Code          | `<code>..</code>`                  |                       |
//! | CodeBlock     | `<pre><code>..</code></pre>`       |                       |
//! | Table parts   | `<table>`, `<thead>`/`<tbody>`, `<tr>`, `<th>`/`<td>` | matching close |
//! | Breaks        | `<br />`                           |                       |
//! | ThematicBreak | `<hr />`                           |                       |

use crate::common::walk::WalkStatus;
use crate::formats::{escape_xml, replace_invalid_xml_chars};
use crate::formats::markdown::{
    destination, heading_level, is_header_row, is_in_tight_list, literal, ordered_start,
    table_cell_info, title, NodeKind,
};
use comrak::nodes::AstNode;
use std::io::{self, Write};

/// Write the HTML fragment for one side of `node`.
///
/// Returns [`WalkStatus::SkipChildren`] when the fragment already covers the
/// node's children (images).
pub fn render_fragment<'a, W: Write + ?Sized>(
    out: &mut W,
    node: &'a AstNode<'a>,
    kind: NodeKind,
    entering: bool,
) -> io::Result<WalkStatus> {
    match kind {
        NodeKind::Document => {}
        NodeKind::Heading => {
            let level = heading_level(node).unwrap_or(1);
            if entering {
                write!(out, "<h{level}>")?;
            } else {
                write!(out, "</h{level}>")?;
            }
        }
        NodeKind::Paragraph => {
            if !is_in_tight_list(node) {
                tag(out, "p", entering)?;
            }
        }
        NodeKind::List => match (ordered_start(node), entering) {
            (None, true) => out.write_all(b"<ul>")?,
            (None, false) => out.write_all(b"</ul>")?,
            (Some(1), true) => out.write_all(b"<ol>")?,
            (Some(start), true) => write!(out, "<ol start=\"{start}\">")?,
            (Some(_), false) => out.write_all(b"</ol>")?,
        },
        NodeKind::Item => tag(out, "li", entering)?,
        NodeKind::BlockQuote => tag(out, "blockquote", entering)?,
        NodeKind::Emph => tag(out, "em", entering)?,
        NodeKind::Strong => tag(out, "strong", entering)?,
        NodeKind::Strikethrough => tag(out, "del", entering)?,
        NodeKind::Link => {
            if entering {
                let href = destination(node).unwrap_or_default();
                write!(out, "<a href=\"{}\"", escape_xml(&href))?;
                if let Some(title) = title(node) {
                    write!(out, " title=\"{}\"", escape_xml(&title))?;
                }
                out.write_all(b">")?;
            } else {
                out.write_all(b"</a>")?;
            }
        }
        NodeKind::Image => {
            if entering {
                let src = destination(node).unwrap_or_default();
                write!(
                    out,
                    "<img src=\"{}\" alt=\"{}\"",
                    escape_xml(&src),
                    escape_xml(&plain_text(node))
                )?;
                if let Some(title) = title(node) {
                    write!(out, " title=\"{}\"", escape_xml(&title))?;
                }
                out.write_all(b" />")?;
                return Ok(WalkStatus::SkipChildren);
            }
        }
        NodeKind::Text => {
            if entering {
                out.write_all(escape_xml(&literal(node)).as_bytes())?;
            }
        }
        NodeKind::Code => {
            if entering {
                write!(out, "<code>{}</code>", escape_xml(&literal(node)))?;
            }
        }
        NodeKind::CodeBlock => {
            if entering {
                write_code_block(out, node)?;
            }
        }
        NodeKind::HtmlBlock | NodeKind::HtmlInline => {
            if entering {
                out.write_all(replace_invalid_xml_chars(&literal(node)).as_bytes())?;
            }
        }
        NodeKind::Table => tag(out, "table", entering)?,
        NodeKind::TableRow => write_table_row(out, node, entering)?,
        NodeKind::TableCell => {
            let (header, align) = table_cell_info(node);
            let name = if header { "th" } else { "td" };
            match (entering, align) {
                (true, Some(align)) => write!(out, "<{name} align=\"{align}\">")?,
                (true, None) => write!(out, "<{name}>")?,
                (false, _) => write!(out, "</{name}>")?,
            }
        }
        NodeKind::SoftBreak | NodeKind::LineBreak => {
            if entering {
                out.write_all(b"<br />")?;
            }
        }
        NodeKind::ThematicBreak => {
            if entering {
                out.write_all(b"<hr />")?;
            }
        }
    }

    Ok(WalkStatus::Continue)
}

/// `<pre><code>` block with the escaped literal. The info string is not rendered.
pub fn write_code_block<'a, W: Write + ?Sized>(out: &mut W, node: &'a AstNode<'a>) -> io::Result<()> {
    out.write_all(b"<pre><code>")?;
    out.write_all(escape_xml(&literal(node)).as_bytes())?;
    out.write_all(b"</code></pre>")
}

fn write_table_row<'a, W: Write + ?Sized>(
    out: &mut W,
    node: &'a AstNode<'a>,
    entering: bool,
) -> io::Result<()> {
    if is_header_row(node) {
        let fragment: &[u8] = if entering { b"<thead><tr>" } else { b"</tr></thead>" };
        return out.write_all(fragment);
    }

    if entering {
        let first_body_row = node.previous_sibling().map_or(true, is_header_row);
        if first_body_row {
            out.write_all(b"<tbody>")?;
        }
        out.write_all(b"<tr>")
    } else {
        out.write_all(b"</tr>")?;
        if node.next_sibling().is_none() {
            out.write_all(b"</tbody>")?;
        }
        Ok(())
    }
}

fn tag<W: Write + ?Sized>(out: &mut W, name: &str, entering: bool) -> io::Result<()> {
    if entering {
        write!(out, "<{name}>")
    } else {
        write!(out, "</{name}>")
    }
}

/// Flattened text of a subtree, for attribute values such as image alt text.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match NodeKind::of(descendant) {
            Some(NodeKind::Text | NodeKind::Code) => text.push_str(&literal(descendant)),
            Some(NodeKind::SoftBreak | NodeKind::LineBreak) => text.push(' '),
            _ => {}
        }
    }
    text
}
