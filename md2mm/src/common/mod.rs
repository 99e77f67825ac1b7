//! Format-agnostic building blocks shared by the emitters

pub mod heading_stack;
pub mod walk;
