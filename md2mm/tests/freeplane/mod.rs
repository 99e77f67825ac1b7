//! Mind map output tests
//!
//! Markdown in, `.mm` XML out, inspected through roxmltree.

mod content;
mod outline;
mod properties;
