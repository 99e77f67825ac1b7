//! Error types for conversion operations

use std::fmt;
use std::io;

/// Errors that can occur while converting Markdown into a mind map
#[derive(Debug)]
pub enum ConvertError {
    /// The Markdown AST contains a node type the emitter has no rule for
    UnsupportedNode(String),
    /// A node appeared under a parent the emitter cannot place it in
    UnexpectedParent { node: String, parent: String },
    /// Writing to the output sink failed
    Io(io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnsupportedNode(name) => write!(f, "Unsupported node type '{name}'"),
            ConvertError::UnexpectedParent { node, parent } => {
                write!(f, "Unexpected parent '{parent}' for node '{node}'")
            }
            ConvertError::Io(err) => write!(f, "Output error: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err)
    }
}
