use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::Note,
    types::{InlineNode, NoteKind},
};

/// A recoverable problem found while scanning paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineIssue {
    /// `[[` followed by neither `#` nor `@`. The marker is dropped.
    UnknownNoteKind { offset: usize },
    /// A note start with no `]]` after it. The rest of the text is kept as-is.
    UnclosedNote { offset: usize },
}

/// Result of scanning one paragraph's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineParse {
    pub nodes: Vec<InlineNode>,
    pub issues: Vec<InlineIssue>,
}

/// Scans paragraph text left to right for inline notes.
///
/// Every byte of `s` ends up in exactly one node except dropped `[[` markers
/// of unknown kind, which are reported in [`InlineParse::issues`].
pub fn parse_inline(s: &str) -> InlineParse {
    let mut cur = Cursor::new(s);
    let mut out = InlineParse::default();
    let mut text_start = cur.pos();

    fn flush_text(nodes: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            nodes.push(InlineNode::Text(Span { start, end }));
        }
    }

    while cur.seek(Note::OPEN) {
        let marker = cur.pos();
        flush_text(&mut out.nodes, text_start, marker);
        cur.bump_n(Note::OPEN.len());

        let Some(kind) = cur.peek().and_then(Note::kind_for) else {
            out.issues
                .push(InlineIssue::UnknownNoteKind { offset: marker });
            text_start = cur.pos();
            continue;
        };

        match try_parse_note(&mut cur, kind, marker) {
            Some(node) => {
                out.nodes.push(node);
                text_start = cur.pos();
            }
            None => {
                out.issues.push(InlineIssue::UnclosedNote { offset: marker });
                text_start = marker;
                break;
            }
        }
    }

    flush_text(&mut out.nodes, text_start, s.len());
    out
}

/// Parses a note whose `[[` ends just before the cursor.
///
/// Returns `None` if the note isn't closed; the cursor is restored in that case.
fn try_parse_note(cur: &mut Cursor<'_>, kind: NoteKind, start: usize) -> Option<InlineNode> {
    let saved = cur.clone();
    cur.bump(); // kind marker
    let body_start = cur.pos();

    if !cur.seek(Note::CLOSE) {
        *cur = saved;
        return None;
    }
    let body_end = cur.pos();
    cur.bump_n(Note::CLOSE.len());

    Some(InlineNode::Note {
        kind,
        full: Span {
            start,
            end: cur.pos(),
        },
        body: Span {
            start: body_start,
            end: body_end,
        },
    })
}
