//! Helpers shared by the mind map tests.

use md2mm::{convert, ConvertOptions};
use roxmltree::Document;

/// Convert with default options.
pub fn to_mind_map(md: &str) -> String {
    convert(md, &ConvertOptions::default()).expect("conversion to succeed")
}

/// Parse the map as XML, panicking with the offending output if it is malformed.
pub fn parse_map(map: &str) -> Document<'_> {
    Document::parse(map).unwrap_or_else(|err| panic!("malformed mind map ({err}):\n{map}"))
}

/// Depth of every heading below the `Result` node, in document order.
pub fn heading_depths(map: &str) -> Vec<usize> {
    let doc = parse_map(map);
    doc.descendants()
        .filter(|n| n.is_element() && is_heading_tag(n.tag_name().name()))
        .map(|heading| {
            let nodes = heading
                .ancestors()
                .filter(|a| a.is_element() && a.tag_name().name() == "node")
                .count();
            // The heading's own node and the Result node.
            nodes - 1
        })
        .collect()
}

/// `TEXT` attributes of every compact node, in document order.
pub fn compact_texts(map: &str) -> Vec<String> {
    let doc = parse_map(map);
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "node")
        .filter_map(|n| n.attribute("TEXT").map(str::to_string))
        .filter(|text| text != "Result")
        .collect()
}

fn is_heading_tag(name: &str) -> bool {
    matches!(name, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}
