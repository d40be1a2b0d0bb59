use crate::parsing::inline::types::NoteKind;

/// Delimiters shared by sidenotes and margin notes.
pub struct Note;

impl Note {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    /// `CLOSE` as a tag token, for spotting stray close markers at block level.
    pub const CLOSE_STR: &'static str = "]]";
    pub const SIDENOTE: u8 = b'#';
    pub const MARGIN_NOTE: u8 = b'@';

    /// Maps the byte right after `[[` to the note kind it selects.
    pub fn kind_for(marker: u8) -> Option<NoteKind> {
        match marker {
            Self::SIDENOTE => Some(NoteKind::Sidenote),
            Self::MARGIN_NOTE => Some(NoteKind::MarginNote),
            _ => None,
        }
    }
}
