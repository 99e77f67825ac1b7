//! Conversion options
//!
//! These knobs are usually filled from `md2mm-config`, but library callers can
//! build them directly. [`ConvertOptions::default`] reproduces the classic
//! Freeplane 1.8 output.

/// Markdown syntax extensions handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExtensions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
}

impl Default for MarkdownExtensions {
    fn default() -> Self {
        MarkdownExtensions {
            table: true,
            strikethrough: true,
            autolink: true,
        }
    }
}

/// Options controlling a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// `TEXT` of the top-level node every heading and paragraph hangs from
    pub root_text: String,
    /// Value of the `version` attribute on `<map>`
    pub map_version: String,
    /// Double every backslash before parsing so it survives literally
    pub escape_backslashes: bool,
    pub extensions: MarkdownExtensions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            root_text: "Result".to_string(),
            map_version: "freeplane 1.8.0".to_string(),
            escape_backslashes: true,
            extensions: MarkdownExtensions::default(),
        }
    }
}
