//! Property-based tests for the ABNF meta-grammar
//!
//! Value notations are checked against regular expressions for the strings
//! they should and should not accept, and generated rule lists are checked
//! to parse back into the rules they were built from.

use abnf::definition::{
    bin_val, char_val, dec_val, hex_val, num_val, prose_val, repetition, rulelist, rulename,
};
use abnf::{Node, Operator, Rule, parse, parse_all};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn accepts(rule: &Rule, input: &str) -> Result<(), TestCaseError> {
    match parse(input, rule) {
        Ok(node) => {
            prop_assert_eq!(node.as_str(), input, "partial match by {}", rule.name());
            Ok(())
        }
        Err(err) => Err(TestCaseError::fail(format!(
            "{} rejected {:?}: {}",
            rule.name(),
            input,
            err
        ))),
    }
}

fn rejects(rule: &Rule, input: &str) -> Result<(), TestCaseError> {
    prop_assert!(
        parse(input, rule).is_err(),
        "{} accepted {:?}",
        rule.name(),
        input
    );
    Ok(())
}

/// A single repetition, as ABNF text
fn repetition_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z][A-Za-z0-9-]{0,8}",
        r#""[ !#-~]{0,8}""#,
        "%x[0-9A-F]{1,4}(-[0-9A-F]{1,4})?",
        "%d[0-9]{1,3}(\\.[0-9]{1,3}){0,3}",
        "<[a-z ]{0,10}>",
        "[0-9]?\\*[0-9]?[A-Za-z]{1,6}",
        "\\( ?[a-z]{1,4} / [a-z]{1,4} ?\\)",
        "\\[ ?[a-z]{1,4} [a-z]{1,4} ?\\]",
    ]
}

/// `name = repetition *(sep repetition)` followed by a line ending
fn rule_strategy() -> impl Strategy<Value = (String, String)> {
    (
        "[A-Za-z][A-Za-z0-9-]{0,8}",
        prop::sample::select(vec!["=", "=/"]),
        prop::collection::vec(repetition_strategy(), 1..5),
        prop::sample::select(vec![" ", " / ", "\n    ", "\n    / "]),
        prop::sample::select(vec!["\n", "\r\n", " ; note\n"]),
    )
        .prop_map(|(name, defined_as, elements, separator, ending)| {
            let text = format!(
                "{} {} {}{}",
                name,
                defined_as,
                elements.join(separator),
                ending
            );
            (name, text)
        })
}

proptest! {
    #[test]
    fn rulename_language(
        valid in "[A-Za-z][A-Za-z0-9-]*",
        invalid in "[0-9-][A-Za-z0-9-]*",
    ) {
        accepts(&rulename(), &valid)?;
        rejects(&rulename(), &invalid)?;
    }

    #[test]
    fn char_val_language(valid in r#"(%[iIsS])?"[ !#-~]*""#, invalid in "[a-zA-Z][ -~]*") {
        accepts(&char_val(), &valid)?;
        rejects(&char_val(), &invalid)?;
    }

    #[test]
    fn num_val_language(
        valid in r"%((b[01]+((\.[01]+)+|-[01]+)?)|(d[0-9]+((\.[0-9]+)+|-[0-9]+)?)|(x[0-9A-F]+((\.[0-9A-F]+)+|-[0-9A-F]+)?))",
    ) {
        accepts(&num_val(), &valid)?;
    }

    #[test]
    fn bin_val_language(
        valid in r"[bB][01]+((\.[01]+)+|-[01]+)?",
        invalid in r"[01]+((\.[01]+)+|-[01]+)?",
    ) {
        accepts(&bin_val(), &valid)?;
        rejects(&bin_val(), &invalid)?;
    }

    #[test]
    fn dec_val_language(
        valid in r"[dD][0-9]+((\.[0-9]+)+|-[0-9]+)?",
        invalid in r"[0-9]+((\.[0-9]+)+|-[0-9]+)?",
    ) {
        accepts(&dec_val(), &valid)?;
        rejects(&dec_val(), &invalid)?;
    }

    #[test]
    fn hex_val_language(
        valid in r"[xX][0-9A-F]+((\.[0-9A-F]+)+|-[0-9A-F]+)?",
        invalid in r"[0-9A-F]+((\.[0-9A-F]+)+|-[0-9A-F]+)?",
    ) {
        accepts(&hex_val(), &valid)?;
        rejects(&hex_val(), &invalid)?;
    }

    #[test]
    fn prose_val_language(valid in "<[ -=?-~]*>", invalid in "[a-zA-Z]*") {
        accepts(&prose_val(), &valid)?;
        rejects(&prose_val(), &invalid)?;
    }

    #[test]
    fn repetition_language(valid in repetition_strategy()) {
        accepts(&repetition(), &valid)?;
    }
}

proptest! {
    // Rule lists build the full meta-grammar per rule; keep the case count low
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_rulelist_parses(rules in prop::collection::vec(rule_strategy(), 1..6)) {
        let text: String = rules.iter().map(|(_, text)| text.as_str()).collect();

        let node = parse_all(&text, &rulelist())
            .map_err(|e| TestCaseError::fail(format!("{:?}: {}", text, e)))?;

        let names: Vec<&str> = node
            .find_all("rule")
            .into_iter()
            .filter_map(|rule| rule.find("rulename"))
            .map(Node::as_str)
            .collect();
        let expected: Vec<&str> = rules.iter().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }
}
