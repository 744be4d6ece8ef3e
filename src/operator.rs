use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::node::Node;
use std::fmt;

/// The deepest failure seen during one evaluation, including failures that
/// an enclosing rule recovered from.
///
/// A repetition that stops, or an alternation whose later branch matches,
/// swallows an error. That error is often the real reason a larger match
/// ended early, so it is recorded here and reported if evaluation fails.
#[derive(Debug, Default)]
pub struct Furthest<'code> {
    error: Option<ParseError<'code>>,
}

impl<'code> Furthest<'code> {
    /// Remember a recovered failure if it got further than what is recorded
    pub fn record(&mut self, error: ParseError<'code>) {
        self.error = Some(match self.error.take() {
            Some(recorded) => recorded.furthest(error),
            None => error,
        });
    }

    /// The deeper of `error` and the recorded failure; ties keep `error`
    pub fn merge(self, error: ParseError<'code>) -> ParseError<'code> {
        match self.error {
            Some(recorded) => error.furthest(recorded),
            None => error,
        }
    }

    pub fn error(&self) -> Option<&ParseError<'code>> {
        self.error.as_ref()
    }
}

/// A named matching function over input text.
///
/// Evaluation starts at `cursor` and returns the production node and the
/// cursor after the match, or the reason it did not match. Failures never
/// consume input: the caller keeps the cursor it passed in.
///
/// Operators hold no mutable state, so one value can be evaluated from many
/// threads at once.
pub trait Operator: Send + Sync {
    fn name(&self) -> &str;

    /// Evaluate at `cursor`, recording every failure this rule recovers from
    /// into `furthest`
    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>>;

    /// Evaluate at `cursor`. A failure reports the deepest position any
    /// sub-rule reached, recovered from or not.
    fn parse<'code>(
        &self,
        cursor: TextCursor<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        let mut furthest = Furthest::default();
        match self.parse_tracked(cursor, &mut furthest) {
            Ok(matched) => Ok(matched),
            Err(err) => Err(furthest.merge(err)),
        }
    }
}

/// An owned operator of any kind.
///
/// Combinators own their sub-rules through `Rule`, so rules of different
/// concrete types compose freely.
pub struct Rule {
    inner: Box<dyn Operator>,
}

impl Rule {
    pub fn new(operator: impl Operator + 'static) -> Self {
        Rule {
            inner: Box::new(operator),
        }
    }
}

impl Operator for Rule {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn parse_tracked<'code>(
        &self,
        cursor: TextCursor<'code>,
        furthest: &mut Furthest<'code>,
    ) -> Result<(Node<'code>, TextCursor<'code>), ParseError<'code>> {
        self.inner.parse_tracked(cursor, furthest)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name()).finish()
    }
}
