/// A byte range `[start, end)` into the raw template text.
///
/// Spans and render nodes carry ranges rather than relying on copied text
/// alone: slicing the raw text with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span.
    ///
    /// Callers guarantee the span lies on char boundaries within `text`.
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}
