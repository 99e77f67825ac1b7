//! The node model the emitters work against.
//!
//! comrak's [`NodeValue`] grows with every extension the parser learns. The
//! emitters only understand a fixed subset, modelled as the closed
//! [`NodeKind`] enumeration. Dispatch on `NodeKind` is exhaustive, so adding a
//! variant is a compile error until every emitter handles it; anything comrak
//! produces outside this set classifies as `None` and aborts the conversion.

use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Heading,
    Paragraph,
    List,
    Item,
    BlockQuote,
    Emph,
    Strong,
    Strikethrough,
    Link,
    Image,
    Text,
    Code,
    CodeBlock,
    HtmlBlock,
    HtmlInline,
    Table,
    TableRow,
    TableCell,
    SoftBreak,
    LineBreak,
    ThematicBreak,
}

impl NodeKind {
    /// Classify a comrak node, or `None` for node types we have no rule for.
    pub fn of(node: &AstNode<'_>) -> Option<NodeKind> {
        let kind = match &node.data.borrow().value {
            NodeValue::Document => NodeKind::Document,
            NodeValue::Heading(_) => NodeKind::Heading,
            NodeValue::Paragraph => NodeKind::Paragraph,
            NodeValue::List(_) => NodeKind::List,
            NodeValue::Item(_) => NodeKind::Item,
            NodeValue::BlockQuote => NodeKind::BlockQuote,
            NodeValue::Emph => NodeKind::Emph,
            NodeValue::Strong => NodeKind::Strong,
            NodeValue::Strikethrough => NodeKind::Strikethrough,
            NodeValue::Link(_) => NodeKind::Link,
            NodeValue::Image(_) => NodeKind::Image,
            NodeValue::Text(_) => NodeKind::Text,
            NodeValue::Code(_) => NodeKind::Code,
            NodeValue::CodeBlock(_) => NodeKind::CodeBlock,
            NodeValue::HtmlBlock(_) => NodeKind::HtmlBlock,
            NodeValue::HtmlInline(_) => NodeKind::HtmlInline,
            NodeValue::Table(_) => NodeKind::Table,
            NodeValue::TableRow(_) => NodeKind::TableRow,
            NodeValue::TableCell => NodeKind::TableCell,
            NodeValue::SoftBreak => NodeKind::SoftBreak,
            NodeValue::LineBreak => NodeKind::LineBreak,
            NodeValue::ThematicBreak => NodeKind::ThematicBreak,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::List => "list",
            NodeKind::Item => "item",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::Emph => "emph",
            NodeKind::Strong => "strong",
            NodeKind::Strikethrough => "strikethrough",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::Text => "text",
            NodeKind::Code => "code",
            NodeKind::CodeBlock => "code_block",
            NodeKind::HtmlBlock => "html_block",
            NodeKind::HtmlInline => "html_inline",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::SoftBreak => "soft_break",
            NodeKind::LineBreak => "line_break",
            NodeKind::ThematicBreak => "thematic_break",
        }
    }
}

/// Human readable name of any comrak node, used in error messages.
pub fn raw_name(node: &AstNode<'_>) -> String {
    if let Some(kind) = NodeKind::of(node) {
        return kind.name().to_string();
    }
    let debug = format!("{:?}", node.data.borrow().value);
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Literal text carried by the node itself (not its children).
pub fn literal(node: &AstNode<'_>) -> String {
    match &node.data.borrow().value {
        NodeValue::Text(text) => text.clone(),
        NodeValue::HtmlInline(html) => html.clone(),
        NodeValue::Code(code) => code.literal.clone(),
        NodeValue::CodeBlock(block) => block.literal.clone(),
        NodeValue::HtmlBlock(html) => html.literal.clone(),
        _ => String::new(),
    }
}

/// Link or image destination.
pub fn destination(node: &AstNode<'_>) -> Option<String> {
    match &node.data.borrow().value {
        NodeValue::Link(link) | NodeValue::Image(link) => Some(link.url.clone()),
        _ => None,
    }
}

/// Link or image title, if one was given.
pub fn title(node: &AstNode<'_>) -> Option<String> {
    match &node.data.borrow().value {
        NodeValue::Link(link) | NodeValue::Image(link) if !link.title.is_empty() => {
            Some(link.title.clone())
        }
        _ => None,
    }
}

pub fn heading_level(node: &AstNode<'_>) -> Option<u8> {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => Some(heading.level),
        _ => None,
    }
}

/// `Some(start)` for ordered lists, `None` for bullet lists.
pub fn ordered_start(node: &AstNode<'_>) -> Option<usize> {
    match &node.data.borrow().value {
        NodeValue::List(list) if matches!(list.list_type, ListType::Ordered) => Some(list.start),
        _ => None,
    }
}

/// True for a paragraph whose list renders without `<p>` tags.
pub fn is_in_tight_list(node: &AstNode<'_>) -> bool {
    let Some(item) = node.parent() else {
        return false;
    };
    if NodeKind::of(item) != Some(NodeKind::Item) {
        return false;
    }
    let Some(list) = item.parent() else {
        return false;
    };
    matches!(&list.data.borrow().value, NodeValue::List(l) if l.tight)
}

/// Whether a table row is the header row.
pub fn is_header_row(node: &AstNode<'_>) -> bool {
    matches!(node.data.borrow().value, NodeValue::TableRow(true))
}

/// Header flag and column alignment (`left`, `center`, `right`) of a table cell.
pub fn table_cell_info(node: &AstNode<'_>) -> (bool, Option<&'static str>) {
    let Some(row) = node.parent() else {
        return (false, None);
    };
    let header = is_header_row(row);

    let mut column = 0;
    let mut current = node.previous_sibling();
    while let Some(sibling) = current {
        column += 1;
        current = sibling.previous_sibling();
    }

    let Some(table) = row.parent() else {
        return (header, None);
    };
    let align = match &table.data.borrow().value {
        NodeValue::Table(table) => match table.alignments.get(column) {
            Some(TableAlignment::Left) => Some("left"),
            Some(TableAlignment::Center) => Some("center"),
            Some(TableAlignment::Right) => Some("right"),
            Some(TableAlignment::None) | None => None,
        },
        _ => None,
    };

    (header, align)
}
