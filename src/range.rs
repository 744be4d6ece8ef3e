use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// Matches one code point within an inclusive range
pub struct Range {
    name: Cow<'static, str>,
    lo: char,
    hi: char,
}

impl Range {
    pub fn new(name: impl Into<Cow<'static, str>>, lo: char, hi: char) -> Self {
        Range {
            name: name.into(),
            lo,
            hi,
        }
    }
}

impl Operator for Range {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        _furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        match cursor.value()? {
            found if (self.lo..=self.hi).contains(&found) => {
                let next = cursor.next();
                Ok((
                    Node::leaf(self.name.clone(), Span::between(cursor, next)),
                    next,
                ))
            }
            found => Err(ParseError::Mismatch {
                rule: self.name.clone(),
                expected: format!("U+{:04X}..=U+{:04X}", self.lo as u32, self.hi as u32).into(),
                found,
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create a `Range` rule
pub fn range(name: impl Into<Cow<'static, str>>, lo: char, hi: char) -> Rule {
    Rule::new(Range::new(name, lo, hi))
}
