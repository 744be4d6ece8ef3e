use crate::cursor::TextCursor;

/// Represents a span in the input with start and end byte offsets
/// and a reference to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'code> {
    /// Reference to the input
    pub source: &'code str,
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        Span { source, start, end }
    }

    /// Span between two cursors over the same input
    pub fn between(from: TextCursor<'code>, to: TextCursor<'code>) -> Self {
        Span::new(from.source(), from.position(), to.position())
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The exact text this span covers
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}
