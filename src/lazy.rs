use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use crate::operator::{Furthest, Operator, Rule};
use std::borrow::Cow;
use std::sync::OnceLock;

/// A rule that defers the construction of the actual rule until parse time.
/// This is what lets a rule refer to itself, or to a rule that refers back
/// to it, without building the grammar eagerly forever.
///
/// The rule is built on first evaluation and kept for later ones. The built
/// rule's node is returned as is.
pub struct Lazy<F> {
    name: Cow<'static, str>,
    factory: F,
    rule: OnceLock<Rule>,
}

impl<F> Lazy<F>
where
    F: Fn() -> Rule + Send + Sync,
{
    pub fn new(name: impl Into<Cow<'static, str>>, factory: F) -> Self {
        Lazy {
            name: name.into(),
            factory,
            rule: OnceLock::new(),
        }
    }
}

impl<F> Operator for Lazy<F>
where
    F: Fn() -> Rule + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        let rule = self.rule.get_or_init(|| {
            log::trace!("building `{}` at {}", self.name, cursor.position());
            (self.factory)()
        });
        rule.parse_tracked(cursor, furthest)
    }
}

/// Create a lazy rule from a factory function
pub fn lazy<F>(name: impl Into<Cow<'static, str>>, factory: F) -> Rule
where
    F: Fn() -> Rule + Send + Sync + 'static,
{
    Rule::new(Lazy::new(name, factory))
}
