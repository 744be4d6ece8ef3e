use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// Ordered choice: tries each alternative from the same cursor and keeps the
/// first that matches.
///
/// This is first-match, not longest-match. When several alternatives could
/// match, the earliest one wins, so grammars must list the intended one
/// first. The matching alternative becomes the node's only child.
///
/// When every alternative fails, the error that got furthest into the input
/// is reported.
pub struct Alts {
    name: Cow<'static, str>,
    first: Rule,
    rest: Vec<Rule>,
}

impl Alts {
    /// # Panics
    ///
    /// If `rules` is empty.
    pub fn new(name: impl Into<Cow<'static, str>>, rules: impl IntoIterator<Item = Rule>) -> Self {
        let name = name.into();
        let mut rules = rules.into_iter();
        let first = match rules.next() {
            Some(first) => first,
            None => panic!("alternation `{}` needs at least one alternative", name),
        };
        Alts {
            name,
            first,
            rest: rules.collect(),
        }
    }

    fn wrap<'code>(
        &self,
        cursor: TextCursor<'code>,
        (child, next): (Node<'code>, TextCursor<'code>),
    ) -> (Node<'code>, TextCursor<'code>) {
        let node = Node::new(self.name.clone(), Span::between(cursor, next), vec![child]);
        (node, next)
    }
}

impl Operator for Alts {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        let mut error = match self.first.parse_tracked(cursor, furthest) {
            Ok(matched) => return Ok(self.wrap(cursor, matched)),
            Err(err) => err,
        };

        for rule in &self.rest {
            match rule.parse_tracked(cursor, furthest) {
                Ok(matched) => {
                    furthest.record(error);
                    return Ok(self.wrap(cursor, matched));
                }
                Err(err) => error = error.furthest(err),
            }
        }

        Err(error)
    }
}

/// Convenience function to create an `Alts` rule
pub fn alts(name: impl Into<Cow<'static, str>>, rules: impl IntoIterator<Item = Rule>) -> Rule {
    Rule::new(Alts::new(name, rules))
}
