//! Property tests: well-formedness, outline depth and determinism over
//! generated documents.

use crate::common::{heading_depths, parse_map, to_mind_map};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Block {
    Heading(u8, String),
    Paragraph(Vec<String>),
    Item(usize, String),
    Quote(String),
    Code(String),
    Link(String),
}

impl Block {
    fn to_markdown(&self) -> String {
        match self {
            Block::Heading(level, text) => format!("{} {text}", "#".repeat(*level as usize)),
            Block::Paragraph(words) => words.join(" "),
            Block::Item(depth, text) => format!("{}- {text}", "  ".repeat(*depth)),
            Block::Quote(text) => format!("> {text}"),
            Block::Code(text) => format!("```\n{text}\n```"),
            Block::Link(text) => format!("[{text}](http://example.com/{text})"),
        }
    }
}

fn word() -> impl Strategy<Value = String> {
    "[a-z&\"'>*]{1,8}"
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        (1u8..=6, word()).prop_map(|(level, text)| Block::Heading(level, text)),
        prop::collection::vec(word(), 1..4).prop_map(Block::Paragraph),
        (0usize..3, word()).prop_map(|(depth, text)| Block::Item(depth, text)),
        word().prop_map(Block::Quote),
        word().prop_map(Block::Code),
        "[a-z]{1,8}".prop_map(Block::Link),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 0..20).prop_map(|blocks| {
        let mut md = blocks
            .iter()
            .map(Block::to_markdown)
            .collect::<Vec<_>>()
            .join("\n\n");
        md.push('\n');
        md
    })
}

/// Depth of each heading following the outline rule: one below the nearest
/// preceding heading of strictly lower level.
fn expected_depths(levels: &[u8]) -> Vec<usize> {
    let mut depths: Vec<usize> = Vec::with_capacity(levels.len());
    for (i, &level) in levels.iter().enumerate() {
        let parent = (0..i).rev().find(|&j| levels[j] < level);
        depths.push(parent.map_or(1, |j| depths[j] + 1));
    }
    depths
}

proptest! {
    #[test]
    fn output_is_well_formed(md in document()) {
        let map = to_mind_map(&md);
        let doc = parse_map(&map);

        let root = doc.root_element();
        prop_assert_eq!(root.tag_name().name(), "map");
        let children: Vec<_> = root.children().filter(|n| n.is_element()).collect();
        prop_assert_eq!(children.len(), 1);
        prop_assert_eq!(children[0].attribute("TEXT"), Some("Result"));
        prop_assert_eq!(map.matches("<node").count(), map.matches("</node>").count());
    }

    #[test]
    fn heading_depth_follows_outline(levels in prop::collection::vec(1u8..=6, 1..30)) {
        let md: String = levels
            .iter()
            .enumerate()
            .map(|(i, level)| format!("{} h{i}\n", "#".repeat(*level as usize)))
            .collect();
        let map = to_mind_map(&md);
        prop_assert_eq!(heading_depths(&map), expected_depths(&levels));
    }

    #[test]
    fn conversion_is_deterministic(md in document()) {
        prop_assert_eq!(to_mind_map(&md), to_mind_map(&md));
    }
}

#[test]
fn expected_depths_reference() {
    assert_eq!(expected_depths(&[1, 2, 2, 3, 1]), vec![1, 2, 2, 3, 1]);
}
