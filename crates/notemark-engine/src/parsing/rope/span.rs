/// A byte range `[start, end)` into a piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Borrows the spanned text out of `s`.
    ///
    /// Spans produced by this crate always sit on `char` boundaries of the
    /// string they were computed from.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
