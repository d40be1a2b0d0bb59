//! # Block Kinds
//!
//! Each block type owns the tag token that selects it; the classifier asks
//! these types instead of hardcoding `#` or `p`.

pub mod paragraph;
pub mod section;

pub use paragraph::Paragraph;
pub use section::{Section, Subsection};

use crate::parsing::inline::kinds::Note;

/// What a body line's leading token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// Opens a `<section>` with an `<h1>` heading.
    Section,
    /// Emits an `<h2>` heading in the current scope.
    Subsection,
    /// A single-line paragraph that may carry inline notes.
    Paragraph,
    /// A `]]` at block level: never valid, only reported.
    CloseNote,
}

impl BlockTag {
    /// Resolves a line's tag token; `None` for anything unrecognised.
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            Section::TAG => Some(Self::Section),
            Subsection::TAG => Some(Self::Subsection),
            Paragraph::TAG => Some(Self::Paragraph),
            Note::CLOSE_STR => Some(Self::CloseNote),
            _ => None,
        }
    }
}
