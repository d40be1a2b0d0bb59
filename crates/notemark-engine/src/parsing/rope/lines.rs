use xi_rope::Rope;

use super::span::Span;

/// A single source line with its position in the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number, used in diagnostics.
    pub number: usize,
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// Raw line text, line terminator included.
    pub text: String,
}

impl LineRef {
    /// The line without its `\n` / `\r\n` terminator.
    ///
    /// Only one terminator is removed; any other trailing `\r` is content.
    pub fn content(&self) -> &str {
        let line = self.text.strip_suffix('\n').unwrap_or(&self.text);
        line.strip_suffix('\r').unwrap_or(line)
    }
}

/// Returns an iterator over the rope's lines in file order.
///
/// Uses `lines_raw` so spans stay exact even for `\r\n` files.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(idx, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number: idx + 1,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}
