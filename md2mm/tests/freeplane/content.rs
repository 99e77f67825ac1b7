//! Block and inline content → node forms

use crate::common::{compact_texts, parse_map, to_mind_map};
use md2mm::{convert, ConvertOptions};

#[test]
fn test_compact_text_node() {
    let map = to_mind_map("Hello\n");
    assert!(map.contains("<node TEXT=\"Hello\"></node>"));
    assert!(!map.contains("richcontent"));
}

#[test]
fn test_compact_link_node() {
    let map = to_mind_map("[Docs](http://x)\n");
    assert!(map.contains("<node TEXT=\"Docs\" LINK=\"http://x\"></node>"));
}

#[test]
fn test_two_inlines_use_rich_content() {
    let map = to_mind_map("Hello *there*\n");
    assert!(map.contains(
        "<node><richcontent TYPE=\"NODE\"><html><body><p>Hello <em>there</em></p></body></html></richcontent></node>"
    ));
}

#[test]
fn test_code_block_node() {
    let map = to_mind_map("```\nprint(1)\n```\n");
    assert!(map.contains(
        "<node><richcontent TYPE=\"NODE\"><html><body><pre><code>print(1)\n</code></pre></body></html></richcontent></node>"
    ));
}

#[test]
fn test_code_block_is_escaped() {
    let map = to_mind_map("```\nif a < b && c\n```\n");
    assert!(map.contains("if a &lt; b &amp;&amp; c"));
    parse_map(&map);
}

#[test]
fn test_indented_code_block() {
    let map = to_mind_map("Para\n\n    indented\n");
    assert!(map.contains("<pre><code>indented\n</code></pre>"));
}

#[test]
fn test_list_items_are_sibling_nodes() {
    let map = to_mind_map("- one\n- two\n- three\n");
    assert_eq!(compact_texts(&map), vec!["one", "two", "three"]);
    assert_eq!(map.matches("<node").count(), 4);
}

#[test]
fn test_ordered_list_items() {
    let map = to_mind_map("1. one\n2. **two**\n");
    assert!(map.contains("<node TEXT=\"one\"></node>"));
    assert!(map.contains("<strong>two</strong>"));
    assert!(!map.contains("<ol"));
}

#[test]
fn test_loose_list_item_rich_paragraph_keeps_p() {
    let map = to_mind_map("- *a*\n\n- b\n");
    assert!(map.contains("<body><p><em>a</em></p></body>"));
}

#[test]
fn test_block_quote_never_compact() {
    let map = to_mind_map("> Hello\n");
    assert!(map.contains(
        "<node><richcontent TYPE=\"NODE\"><html><body><p>Hello</p></body></html></richcontent></node>"
    ));
    assert!(!map.contains("TEXT=\"Hello\""));
}

#[test]
fn test_line_breaks_normalize() {
    let map = to_mind_map("one\ntwo\\\nthree\n");
    assert!(map.contains("<p>one<br />two"));
    let options = ConvertOptions {
        escape_backslashes: false,
        ..ConvertOptions::default()
    };
    let map = convert("one\ntwo\\\nthree\n", &options).unwrap();
    assert!(map.contains("<p>one<br />two<br />three</p>"));
}

#[test]
fn test_image_in_paragraph() {
    let map = to_mind_map("![logo](logo.png)\n");
    assert!(map.contains("<p><img src=\"logo.png\" alt=\"logo\" /></p>"));
    parse_map(&map);
}

#[test]
fn test_strikethrough_and_inline_code() {
    let map = to_mind_map("~~old~~ `new`\n");
    assert!(map.contains("<p><del>old</del> <code>new</code></p>"));
}

#[test]
fn test_table_node() {
    let map = to_mind_map("| a | b |\n|---|--:|\n| 1 | 2 |\n");
    assert!(map.contains("<table><thead><tr><th>a</th><th align=\"right\">b</th></tr></thead>"));
    assert!(map.contains("<tbody><tr><td>1</td><td align=\"right\">2</td></tr></tbody></table>"));
    parse_map(&map);
}

#[test]
fn test_tables_disabled_render_as_text() {
    let mut options = ConvertOptions::default();
    options.extensions.table = false;
    let map = convert("|a|\n|-|\n", &options).unwrap();
    assert!(!map.contains("<table>"));
}

#[test]
fn test_raw_html_block_passes_through() {
    let map = to_mind_map("<p align=\"center\">x</p>\n");
    assert!(map.contains("<body><p align=\"center\">x</p>\n</body>"));
}

#[test]
fn test_windows_paths_keep_backslashes() {
    let map = to_mind_map("C:\\Users\\me\n");
    assert!(map.contains("<node TEXT=\"C:\\Users\\me\"></node>"));
}

#[test]
fn test_control_characters_keep_map_well_formed() {
    let map = to_mind_map("a\u{0c}b\n");
    parse_map(&map);
    assert_eq!(compact_texts(&map), vec!["a\u{FFFD}b"]);

    let map = to_mind_map("x *a\u{1}b*\n\n```\n\u{7}\n```\n");
    let doc = parse_map(&map);
    assert!(!doc.root().descendants().any(|n| n.text().is_some_and(|t| t.contains('\u{7}'))));
}
