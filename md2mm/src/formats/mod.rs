//! Format implementations
//!
//! - `markdown`: parsing adapter and the node model every emitter works against
//! - `html`: per-node HTML fragments used inside `richcontent` bodies
//! - `freeplane`: the mind map emitter

pub mod freeplane;
pub mod html;
pub mod markdown;

pub use freeplane::{render_mind_map, MindMapEmitter};
pub use markdown::{escape_backslashes, parse_markdown, NodeKind};

use std::borrow::Cow;

/// Escape text for use in XML content and attribute values
pub fn escape_xml(text: &str) -> String {
    replace_invalid_xml_chars(text)
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Replace characters XML 1.0 does not allow (C0 controls other than tab, LF
/// and CR, U+FFFE, U+FFFF) with U+FFFD.
pub fn replace_invalid_xml_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
            .collect(),
    )
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
