//! Markdown to Freeplane mind map conversion
//!
//!     This crate turns a Markdown document into a Freeplane (`.mm`) mind map. Headings become
//!     the branches of the map, paragraphs and list items its leaves, and anything that needs
//!     formatting is carried as an HTML `richcontent` body.
//!
//!     This is a pure lib: it powers the md2mm binary but never touches the shell, the
//!     environment or the file system.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── options.rs              # ConvertOptions
//!     ├── common
//!     │   ├── heading_stack.rs    # Flat heading levels → tree depth
//!     │   └── walk.rs             # Enter/leave traversal driver
//!     ├── formats
//!     │   ├── markdown            # comrak adapter and the closed NodeKind model
//!     │   ├── html                # Per-node HTML fragments for richcontent bodies
//!     │   └── freeplane           # The mind map emitter and compact node rules
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     Two pieces carry the weight. The heading stack (./common/heading_stack.rs) rebuilds the
//!     outline from Markdown's flat heading sequence, and the compact node rule
//!     (./formats/freeplane/compact.rs) decides when a paragraph can be a plain `TEXT` node.
//!     Both are small, pure and tested in isolation; the emitter only wires them to the walk.
//!
//! Library Choices
//!
//!     Parsing is left to `comrak`. We never parse Markdown ourselves, we only adapt its AST.
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # Discovers the sub modules
//!     ├── common/mod.rs           # Helpers: conversion and XML inspection
//!     └── freeplane
//!         ├── outline.rs
//!         ├── content.rs
//!         └── properties.rs       # proptest well-formedness

pub mod common;
pub mod error;
pub mod formats;
pub mod options;

pub use error::ConvertError;
pub use formats::freeplane::render_mind_map;
pub use formats::markdown::{escape_backslashes, parse_markdown};
pub use options::{ConvertOptions, MarkdownExtensions};

use comrak::Arena;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name the mind map is written to, beside the input file.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "result.mm";

/// Converts a Markdown document into a Freeplane mind map.
///
/// The whole document is converted before anything is returned; on error no
/// output exists.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let bytes = convert_to_bytes(source, options)?;
    // Every fragment is either ASCII markup or copied from UTF-8 input.
    String::from_utf8(bytes).map_err(|err| {
        ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// Converts a Markdown document and writes the mind map to `writer`.
///
/// Nothing is written unless the conversion succeeds.
pub fn convert_to_writer<W: Write>(
    source: &str,
    options: &ConvertOptions,
    mut writer: W,
) -> Result<(), ConvertError> {
    let bytes = convert_to_bytes(source, options)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

fn convert_to_bytes(source: &str, options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    debug!(
        bytes = source.len(),
        escape_backslashes = options.escape_backslashes,
        "converting markdown"
    );

    let source = if options.escape_backslashes {
        escape_backslashes(source)
    } else {
        source.to_string()
    };

    let arena = Arena::new();
    let root = parse_markdown(&arena, &source, &options.extensions);
    let output = render_mind_map(root, options, Vec::with_capacity(source.len() * 2))?;

    debug!(bytes = output.len(), "mind map rendered");
    Ok(output)
}

/// Destination for the mind map of `input`: `file_name` in the input's directory.
pub fn output_path_for(input: impl AsRef<Path>, file_name: &str) -> PathBuf {
    let dir = input
        .as_ref()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    dir.join(file_name)
}
