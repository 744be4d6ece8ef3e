use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// Ordered sequence: every element must match, one after the other.
///
/// The node's children are the element nodes in order. If any element
/// fails the whole sequence fails with that element's error, and nothing
/// matched so far survives.
pub struct Concat {
    name: Cow<'static, str>,
    rules: Vec<Rule>,
}

impl Concat {
    /// # Panics
    ///
    /// If `rules` is empty.
    pub fn new(name: impl Into<Cow<'static, str>>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let name = name.into();
        let rules: Vec<Rule> = rules.into_iter().collect();
        assert!(
            !rules.is_empty(),
            "concatenation `{}` needs at least one element",
            name
        );
        Concat { name, rules }
    }
}

impl Operator for Concat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        let mut children = Vec::with_capacity(self.rules.len());
        let mut current = cursor;

        for rule in &self.rules {
            let (node, next) = rule.parse_tracked(current, furthest)?;
            children.push(node);
            current = next;
        }

        let node = Node::new(self.name.clone(), Span::between(cursor, current), children);
        Ok((node, current))
    }
}

/// Convenience function to create a `Concat` rule
pub fn concat(name: impl Into<Cow<'static, str>>, rules: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::new(Concat::new(name, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use crate::rune::rune;

    fn crlf() -> Rule {
        concat("CR LF", [rune("CR", '\r'), rune("LF", '\n')])
    }

    #[test]
    fn test_concat_all_succeed() {
        let (node, cursor) = crlf().parse(TextCursor::new("\r\nrest")).unwrap();

        assert_eq!(node.name(), "CR LF");
        assert_eq!(node.as_str(), "\r\n");
        let names: Vec<&str> = node.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["CR", "LF"]);
        assert_eq!(cursor.value().unwrap(), 'r');
    }

    #[test]
    fn test_concat_first_fails() {
        let result = crlf().parse(TextCursor::new("\n"));
        assert!(result.is_err());
    }

    #[test]
    fn test_concat_last_fails_reports_its_position() {
        let rule = concat(
            "abc",
            [rune("a", 'a'), rune("b", 'b'), rune("c", 'c')],
        );
        let cursor = TextCursor::new("abx");

        let err = rule.parse(cursor).unwrap_err();
        assert_eq!(err.position(), 2);

        // The caller's cursor is untouched and can be reused
        assert_eq!(cursor.position(), 0);
        let (node, _) = rune("a", 'a').parse(cursor).unwrap();
        assert_eq!(node.as_str(), "a");
    }

    #[test]
    fn test_concat_children_spans_cover_parent() {
        let rule = concat(
            "word",
            [range("lower", 'a', 'z'), range("lower", 'a', 'z')],
        );
        let (node, _) = rule.parse(TextCursor::new("ok!")).unwrap();

        let joined: String = node.children().iter().map(Node::as_str).collect();
        assert_eq!(joined, node.as_str());
    }

    #[test]
    #[should_panic(expected = "needs at least one element")]
    fn test_concat_empty_panics() {
        let _ = concat("empty", Vec::<Rule>::new());
    }
}
