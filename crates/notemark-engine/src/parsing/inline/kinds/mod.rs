//! # Inline Kinds
//!
//! Delimiter constants for inline constructs live here, not in parser code.

pub mod note;

pub use note::Note;
