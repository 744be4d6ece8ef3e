use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A byte offset into the input, together with the input itself
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where evaluation failed
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'code str {
        self.code
    }

    /// Line number and byte offset within that line.
    ///
    /// Byte offset instead of column: columns depend on tab width and
    /// rendering, byte offsets do not.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code.as_bytes()[..self.loc.min(self.code.len())];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the failing line, with a pointer under
    /// the failing byte
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split('\n') yields a trailing empty line after a final newline,
        // which is where an end-of-input position points
        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content.trim_end_matches('\r')));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        writeln!(f)?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Why a rule did not match.
///
/// Every variant is a no-match: a failed parse is an expected outcome, never
/// a fatal one. The location is where the failing primitive was attempted, so
/// after alternation it is the furthest point any branch reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError<'code> {
    #[error("unexpected end of input at {0}")]
    UnexpectedEndOfInput(CodeLoc<'code>),

    #[error("`{rule}` expected {expected}, found {found:?} at {loc}")]
    Mismatch {
        rule: Cow<'static, str>,
        expected: Cow<'static, str>,
        found: char,
        loc: CodeLoc<'code>,
    },

    #[error("unconsumed input at {0}")]
    UnconsumedInput(CodeLoc<'code>),
}

impl<'code> ParseError<'code> {
    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::UnexpectedEndOfInput(loc) => *loc,
            ParseError::Mismatch { loc, .. } => *loc,
            ParseError::UnconsumedInput(loc) => *loc,
        }
    }

    /// Byte offset where this error occurred
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// Keep whichever error made it further into the input; ties keep `self`
    pub(crate) fn furthest(self, other: Self) -> Self {
        if other.position() > self.position() {
            other
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_position_first_line() {
        let loc = CodeLoc::new("hello", 3);
        assert_eq!(
            loc.readable_position(),
            ReadablePosition {
                line: 1,
                byte_offset: 3
            }
        );
    }

    #[test]
    fn test_readable_position_past_end() {
        let loc = CodeLoc::new("line1\nline2", 11);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_readable_position_after_newline() {
        let loc = CodeLoc::new("hello\n", 6);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 0);
    }

    #[test]
    fn test_context_lines_window() {
        let code = "a\nb\nc\nd\ne\nf\ng";
        let loc = CodeLoc::new(code, 6); // 'd', line 4
        let context = loc.context_lines().join("\n");

        assert!(!context.contains("1 | a"));
        assert!(context.contains("2 | b"));
        assert!(context.contains("  > 4 | d"));
        assert!(context.contains("6 | f"));
        assert!(!context.contains("7 | g"));
        assert!(context.contains("^--- here"));
    }

    #[test]
    fn test_context_lines_empty_input() {
        let loc = CodeLoc::new("", 0);
        let context = loc.context_lines();

        assert_eq!(context.len(), 2);
        assert!(context[1].ends_with("^--- here"));
    }

    #[test]
    fn test_error_display() {
        let error = ParseError::Mismatch {
            rule: "DIGIT".into(),
            expected: "U+0030..=U+0039".into(),
            found: 'x',
            loc: CodeLoc::new("12x", 2),
        };
        let display = error.to_string();

        assert!(display.contains("`DIGIT` expected U+0030..=U+0039, found 'x'"));
        assert!(display.contains("line 1, byte offset 2"));
        assert!(display.contains("  > 1 | 12x"));
    }

    #[test]
    fn test_end_of_input_display() {
        let error = ParseError::UnexpectedEndOfInput(CodeLoc::new("hello\nworld", 11));
        let display = error.to_string();

        assert!(display.contains("unexpected end of input"));
        assert!(display.contains("line 2"));
        assert!(display.contains("world"));
    }

    #[test]
    fn test_furthest_prefers_deeper_error() {
        let shallow = ParseError::UnexpectedEndOfInput(CodeLoc::new("abc", 1));
        let deep = ParseError::UnconsumedInput(CodeLoc::new("abc", 2));

        assert_eq!(shallow.clone().furthest(deep.clone()).position(), 2);
        assert_eq!(deep.furthest(shallow).position(), 2);
    }
}
