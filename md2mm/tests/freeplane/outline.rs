//! Heading hierarchy → node nesting

use crate::common::{compact_texts, heading_depths, parse_map, to_mind_map};
use insta::assert_snapshot;

#[test]
fn test_heading_levels_become_depths() {
    let map = to_mind_map("# a\n## b\n## c\n### d\n# e\n");
    assert_eq!(heading_depths(&map), vec![1, 2, 2, 3, 1]);
}

#[test]
fn test_level_one_after_level_three_closes_everything() {
    let map = to_mind_map("# a\n## b\n### c\n# d\n");
    let doc = parse_map(&map);
    let result = doc
        .descendants()
        .find(|n| n.attribute("TEXT") == Some("Result"))
        .unwrap();
    let top_level = result.children().filter(|n| n.is_element()).count();
    assert_eq!(top_level, 2);
}

#[test]
fn test_skipped_levels() {
    let map = to_mind_map("## a\n#### b\n### c\n# d\n###### e\n");
    assert_eq!(heading_depths(&map), vec![1, 2, 2, 1, 2]);
}

#[test]
fn test_content_nests_under_latest_heading() {
    let map = to_mind_map("# Title\n\nIntro\n\n## Part\n\n- one\n- two\n");
    let doc = parse_map(&map);

    let depth_of = |text: &str| {
        let node = doc
            .descendants()
            .find(|n| n.attribute("TEXT") == Some(text))
            .unwrap_or_else(|| panic!("no node {text}"));
        node.ancestors().filter(|a| a.has_tag_name("node")).count() - 1
    };

    assert_eq!(depth_of("Intro"), 2);
    assert_eq!(depth_of("one"), 3);
    assert_eq!(depth_of("two"), 3);
    assert_eq!(compact_texts(&map), vec!["Intro", "one", "two"]);
}

#[test]
fn test_content_before_first_heading_stays_at_root() {
    let map = to_mind_map("Preface\n\n# Title\n");
    let doc = parse_map(&map);
    let preface = doc
        .descendants()
        .find(|n| n.attribute("TEXT") == Some("Preface"))
        .unwrap();
    assert_eq!(
        preface.parent_element().and_then(|p| p.attribute("TEXT")),
        Some("Result")
    );
}

#[test]
fn test_small_document_snapshot() {
    let map = to_mind_map("# Title\n\nHello\n\n- [Docs](http://x)\n");
    assert_snapshot!(map, @r#"<map version="freeplane 1.8.0"><node TEXT="Result"><node><richcontent TYPE="NODE"><html><body><h1>Title</h1></body></html></richcontent><node TEXT="Hello"></node><node TEXT="Docs" LINK="http://x"></node></node></node></map>"#);
}
