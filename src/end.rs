use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// Succeeds, without consuming anything, only at end of input
pub struct EndOfInput {
    name: Cow<'static, str>,
}

impl EndOfInput {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        EndOfInput { name: name.into() }
    }
}

impl Operator for EndOfInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        _furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        if cursor.eoi() {
            Ok((
                Node::leaf(self.name.clone(), Span::between(cursor, cursor)),
                cursor,
            ))
        } else {
            Err(ParseError::UnconsumedInput(cursor.loc()))
        }
    }
}

/// Convenience function to create an `EndOfInput` rule
pub fn end_of_input(name: impl Into<Cow<'static, str>>) -> Rule {
    Rule::new(EndOfInput::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_on_empty() {
        let (node, cursor) = end_of_input("EOI").parse(TextCursor::new("")).unwrap();

        assert_eq!(node.name(), "EOI");
        assert!(node.span().is_empty());
        assert!(cursor.eoi());
    }

    #[test]
    fn test_end_of_input_after_advancing() {
        let cursor = TextCursor::new("ab").next().next();
        let (node, _) = end_of_input("EOI").parse(cursor).unwrap();

        assert_eq!((node.start(), node.end()), (2, 2));
    }

    #[test]
    fn test_end_of_input_with_remaining_input() {
        let cursor = TextCursor::new("ab").next();
        let result = end_of_input("EOI").parse(cursor);

        match result {
            Err(ParseError::UnconsumedInput(loc)) => assert_eq!(loc.position(), 1),
            other => panic!("Expected UnconsumedInput, got {:?}", other),
        }
    }
}
