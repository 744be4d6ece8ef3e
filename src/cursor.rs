use crate::error::{CodeLoc, ParseError};

/// Position in the input text, advanced one code point at a time.
///
/// A cursor is `Copy` and is never mutated in place: advancing returns a new
/// cursor. Backtracking is therefore just reusing an older value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextCursor<'code> {
    Valid { data: &'code str, position: usize },
    EndOfInput { data: &'code str },
}

impl<'code> TextCursor<'code> {
    pub fn new(data: &'code str) -> Self {
        if data.is_empty() {
            return TextCursor::EndOfInput { data };
        }
        TextCursor::Valid { data, position: 0 }
    }

    /// Get the code point at the current position
    ///
    /// Returns an error if the cursor is at end of input
    pub fn value(&self) -> Result<char, ParseError<'code>> {
        match self {
            TextCursor::Valid { data, position } => data[*position..]
                .chars()
                .next()
                .ok_or(ParseError::UnexpectedEndOfInput(CodeLoc::new(data, *position))),
            TextCursor::EndOfInput { data } => Err(ParseError::UnexpectedEndOfInput(
                CodeLoc::new(data, data.len()),
            )),
        }
    }

    /// Advance past the current code point.
    ///
    /// If already at the end, returns a cursor still positioned at the end.
    pub fn next(self) -> Self {
        match self {
            TextCursor::Valid { data, position } => {
                let width = data[position..].chars().next().map_or(1, char::len_utf8);
                if position + width >= data.len() {
                    TextCursor::EndOfInput { data }
                } else {
                    TextCursor::Valid {
                        data,
                        position: position + width,
                    }
                }
            }
            TextCursor::EndOfInput { data } => TextCursor::EndOfInput { data },
        }
    }

    /// Byte offset into the input; the input length at end of input
    pub fn position(&self) -> usize {
        match self {
            TextCursor::Valid { position, .. } => *position,
            TextCursor::EndOfInput { data } => data.len(),
        }
    }

    pub fn eoi(&self) -> bool {
        matches!(self, TextCursor::EndOfInput { .. })
    }

    pub fn source(&self) -> &'code str {
        match self {
            TextCursor::Valid { data, .. } => data,
            TextCursor::EndOfInput { data } => data,
        }
    }

    /// Location of this cursor, for diagnostics
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.source(), self.position())
    }
}
