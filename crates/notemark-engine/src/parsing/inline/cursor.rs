/// A cursor for byte-wise inline scanning with position tracking.
///
/// Positions are byte offsets into `s`. Callers only stop on ASCII delimiters,
/// so any position they turn into a span sits on a `char` boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to the next occurrence of `pat` at or after the cursor.
    ///
    /// Returns `false` and leaves the cursor untouched when there is none.
    pub fn seek(&mut self, pat: &[u8]) -> bool {
        let Some(rest) = self.s.as_bytes().get(self.i..) else {
            return false;
        };
        match rest.windows(pat.len()).position(|w| w == pat) {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => false,
        }
    }
}
