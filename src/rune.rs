use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// Matches exactly one code point
pub struct Rune {
    name: Cow<'static, str>,
    expected: char,
}

impl Rune {
    pub fn new(name: impl Into<Cow<'static, str>>, expected: char) -> Self {
        Rune {
            name: name.into(),
            expected,
        }
    }
}

impl Operator for Rune {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        _furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        match cursor.value()? {
            found if found == self.expected => {
                let next = cursor.next();
                Ok((
                    Node::leaf(self.name.clone(), Span::between(cursor, next)),
                    next,
                ))
            }
            found => Err(ParseError::Mismatch {
                rule: self.name.clone(),
                expected: format!("{:?}", self.expected).into(),
                found,
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create a `Rune` rule
pub fn rune(name: impl Into<Cow<'static, str>>, expected: char) -> Rule {
    Rule::new(Rune::new(name, expected))
}
