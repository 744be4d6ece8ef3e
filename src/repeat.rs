use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use crate::position::Span;
use std::borrow::Cow;

/// `min*max rule`: matches `rule` as many times as it can, up to `max`.
///
/// Every successful repetition becomes a child. Repetition is greedy and
/// never gives back a repetition it already matched. Fails with the error of
/// the failing attempt when fewer than `min` repetitions matched; otherwise
/// that error is recorded as a recovered failure.
///
/// A repetition that matches zero width ends the loop, since repeating it
/// cannot make progress.
pub struct Repeat {
    name: Cow<'static, str>,
    min: usize,
    max: Option<usize>,
    rule: Rule,
}

impl Repeat {
    /// `max` of `None` means unbounded.
    ///
    /// # Panics
    ///
    /// If `min` is greater than `max`.
    pub fn new(name: impl Into<Cow<'static, str>>, min: usize, max: Option<usize>, rule: Rule) -> Self {
        let name = name.into();
        if let Some(max) = max {
            assert!(
                min <= max,
                "repetition `{}` has minimum {} above maximum {}",
                name,
                min,
                max
            );
        }
        Repeat {
            name,
            min,
            max,
            rule,
        }
    }
}

impl Operator for Repeat {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        let mut children = Vec::new();
        let mut current = cursor;

        while self.max.is_none_or(|max| children.len() < max) {
            match self.rule.parse_tracked(current, furthest) {
                Ok((node, next)) => {
                    let advanced = next.position() > current.position();
                    children.push(node);
                    current = next;
                    if !advanced {
                        break;
                    }
                }
                Err(err) if children.len() < self.min => return Err(err),
                Err(err) => {
                    furthest.record(err);
                    break;
                }
            }
        }

        let node = Node::new(self.name.clone(), Span::between(cursor, current), children);
        Ok((node, current))
    }
}

/// `*rule`: zero or more
pub fn repeat0_inf(name: impl Into<Cow<'static, str>>, rule: Rule) -> Rule {
    Rule::new(Repeat::new(name, 0, None, rule))
}

/// `1*rule`: one or more
pub fn repeat1_inf(name: impl Into<Cow<'static, str>>, rule: Rule) -> Rule {
    Rule::new(Repeat::new(name, 1, None, rule))
}

/// `min*rule`: at least `min`
pub fn repeat_min(name: impl Into<Cow<'static, str>>, min: usize, rule: Rule) -> Rule {
    Rule::new(Repeat::new(name, min, None, rule))
}

/// `min*max rule`: between `min` and `max` inclusive
pub fn repeat_between(
    name: impl Into<Cow<'static, str>>,
    min: usize,
    max: usize,
    rule: Rule,
) -> Rule {
    Rule::new(Repeat::new(name, min, Some(max), rule))
}

/// `[rule]`: zero or one
pub fn optional(name: impl Into<Cow<'static, str>>, rule: Rule) -> Rule {
    Rule::new(Repeat::new(name, 0, Some(1), rule))
}
