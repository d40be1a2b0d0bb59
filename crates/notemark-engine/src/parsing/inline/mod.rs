//! # Inline Parsing
//!
//! Cursor-based scanning of paragraph text for inline notes.
//!
//! ## Syntax
//!
//! - `[[#body]]` is a sidenote, rendered with a numbered toggle
//! - `[[@body]]` is a margin note, rendered with a fixed symbol toggle
//!
//! Notes do not nest: the body runs to the first `]]`. Text around notes is
//! passed through verbatim.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `NoteKind`, `NoteId`
//! - **`kinds`**: `Note`, which owns the `[[` / `]]` delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlineIssue, InlineParse, parse_inline};
pub use types::{InlineNode, NoteId, NoteKind};
