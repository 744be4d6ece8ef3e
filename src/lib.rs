//! # abnf - RFC 5234 grammar matching
//!
//! A combinator runtime for ABNF (Augmented Backus-Naur Form) together with
//! the RFC 5234 core rules and ABNF's own grammar written with it.
//!
//! Rules are built from two primitives, [`rune`] and [`range`], and the
//! combinators [`concat`], [`alts`], the repetition family and [`lazy`].
//! Evaluating a rule yields a production tree of [`Node`]s exposing the text
//! each named rule matched.
//!
//! - **Backtracking by value**: cursors are immutable, a failed branch is
//!   simply dropped
//! - **First-match choice**: [`alts`] commits to the first alternative that
//!   matches
//! - **Shareable rules**: rules hold no mutable state and are `Send + Sync`
//!
//! ```
//! use abnf::{core_rules, definition, parse};
//!
//! let node = parse("name1-2-3", &definition::rulename()).unwrap();
//! assert_eq!(node.as_str(), "name1-2-3");
//!
//! assert!(parse("\r", &core_rules::crlf()).is_err());
//! ```

pub mod alts;
pub mod concat;
pub mod core_rules;
pub mod cursor;
pub mod definition;
pub mod end;
pub mod error;
pub mod lazy;
pub mod node;
pub mod operator;
pub mod position;
pub mod range;
pub mod repeat;
pub mod rune;

pub use alts::{Alts, alts};
pub use concat::{Concat, concat};
pub use cursor::TextCursor;
pub use end::{EndOfInput, end_of_input};
pub use error::{CodeLoc, ParseError};
pub use lazy::{Lazy, lazy};
pub use node::Node;
pub use operator::{Furthest, Operator, Rule};
pub use position::Span;
pub use range::{Range, range};
pub use repeat::{Repeat, optional, repeat_between, repeat_min, repeat0_inf, repeat1_inf};
pub use rune::{Rune, rune};

/// Evaluate `rule` against `input` from offset 0.
///
/// Trailing input after the match is not an error; see [`parse_all`] for
/// that.
pub fn parse<'code, O>(input: &'code str, rule: &O) -> Result<Node<'code>, ParseError<'code>>
where
    O: Operator + ?Sized,
{
    log::debug!("parsing {} bytes with `{}`", input.len(), rule.name());

    match rule.parse(TextCursor::new(input)) {
        Ok((node, cursor)) => {
            log::debug!("`{}` matched {} bytes", rule.name(), cursor.position());
            Ok(node)
        }
        Err(err) => {
            log::debug!("`{}` did not match, stopped at {}", rule.name(), err.position());
            Err(err)
        }
    }
}

/// Like [`parse`], but the match must consume the whole input.
///
/// When input is left over, the error is the deepest failure reached while
/// matching, which is usually where the text stopped making sense. It is
/// `UnconsumedInput` only when nothing got further than the leftover input.
pub fn parse_all<'code, O>(input: &'code str, rule: &O) -> Result<Node<'code>, ParseError<'code>>
where
    O: Operator + ?Sized,
{
    log::debug!("parsing all {} bytes with `{}`", input.len(), rule.name());

    let mut furthest = Furthest::default();
    let (node, cursor) = match rule.parse_tracked(TextCursor::new(input), &mut furthest) {
        Ok(matched) => matched,
        Err(err) => {
            let err = furthest.merge(err);
            log::debug!("`{}` did not match, stopped at {}", rule.name(), err.position());
            return Err(err);
        }
    };

    if let Err(err) = EndOfInput::new("end of input").parse(cursor) {
        log::debug!("`{}` left input unconsumed at {}", rule.name(), cursor.position());
        return Err(furthest.merge(err));
    }

    Ok(node)
}
