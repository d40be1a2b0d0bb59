use std::fmt;

use crate::parsing::rope::span::Span;

/// Which toggle an inline note is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Numbered toggle in the margin.
    Sidenote,
    /// Unnumbered toggle showing a fixed symbol.
    MarginNote,
}

/// A parsed inline node with byte spans into the paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Text passed through verbatim.
    Text(Span),
    /// A sidenote or margin note.
    Note {
        kind: NoteKind,
        /// Full span including `[[`, the kind marker and `]]`.
        full: Span,
        /// The note body between the kind marker and `]]`.
        body: Span,
    },
}

/// Element id of a note, derived only from the note's body text.
///
/// Two notes with the same body share an id, in any document and on any run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(u64);

impl NoteId {
    pub fn from_body(body: &str) -> Self {
        let hash = blake3::hash(body.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        Self(u64::from_le_bytes(prefix))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
