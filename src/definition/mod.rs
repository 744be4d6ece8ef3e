//! ABNF described in ABNF: the rules of RFC 5234 section 4.
//!
//! Running [`rulelist`] over grammar text recognizes it as ABNF and yields a
//! production tree with a `rule` node per definition, `rulename` nodes for
//! every name, and so on.
//!
//! The choices are ordered for first-match evaluation. `defined-as` tries
//! `"=/"` before `"="`, and `repeat` tries the `*` form before the plain
//! count, since the shorter alternative would otherwise win and strand the
//! rest of the input.

mod values;

pub use values::{
    bin_val, case_insensitive_string, case_sensitive_string, char_val, dec_val, hex_val, num_val,
    prose_val, quoted_string,
};

use crate::alts::alts;
use crate::concat::concat;
use crate::core_rules::{alpha, crlf, digit, vchar, wsp};
use crate::lazy::lazy;
use crate::operator::Rule;
use crate::repeat::{optional, repeat0_inf, repeat1_inf};
use crate::rune::rune;

/// A character from a quoted ABNF literal. Quoted literals are
/// case-insensitive, so letters match either case.
fn literal(c: char) -> Rule {
    let name = format!("\"{}\"", c);
    if c.is_ascii_alphabetic() {
        alts(
            name,
            [
                rune(c.to_ascii_lowercase().to_string(), c.to_ascii_lowercase()),
                rune(c.to_ascii_uppercase().to_string(), c.to_ascii_uppercase()),
            ],
        )
    } else {
        rune(name, c)
    }
}

/// `rulelist = 1*( rule / (*c-wsp c-nl) )`
pub fn rulelist() -> Rule {
    repeat1_inf(
        "rulelist",
        alts(
            "rule / (*c-wsp c-nl)",
            [
                rule(),
                concat("*c-wsp c-nl", [repeat0_inf("*c-wsp", c_wsp()), c_nl()]),
            ],
        ),
    )
}

/// `rule = rulename defined-as elements c-nl`
pub fn rule() -> Rule {
    concat("rule", [rulename(), defined_as(), elements(), c_nl()])
}

/// `rulename = ALPHA *(ALPHA / DIGIT / "-")`
pub fn rulename() -> Rule {
    concat(
        "rulename",
        [
            alpha(),
            repeat0_inf(
                "*(ALPHA / DIGIT / \"-\")",
                alts(
                    "ALPHA / DIGIT / \"-\"",
                    [alpha(), digit(), literal('-')],
                ),
            ),
        ],
    )
}

/// `defined-as = *c-wsp ("=/" / "=") *c-wsp`
///
/// `=/` adds alternatives to an existing rule.
pub fn defined_as() -> Rule {
    concat(
        "defined-as",
        [
            repeat0_inf("*c-wsp", c_wsp()),
            alts(
                "\"=/\" / \"=\"",
                [
                    concat("\"=/\"", [literal('='), literal('/')]),
                    literal('='),
                ],
            ),
            repeat0_inf("*c-wsp", c_wsp()),
        ],
    )
}

/// `elements = alternation *c-wsp`
pub fn elements() -> Rule {
    concat(
        "elements",
        [alternation(), repeat0_inf("*c-wsp", c_wsp())],
    )
}

/// `c-wsp = WSP / (c-nl WSP)`
pub fn c_wsp() -> Rule {
    alts("c-wsp", [wsp(), concat("c-nl WSP", [c_nl(), wsp()])])
}

/// `c-nl = comment / CRLF` ; comment or newline
pub fn c_nl() -> Rule {
    alts("c-nl", [comment(), crlf()])
}

/// `comment = ";" *(WSP / VCHAR) CRLF`
pub fn comment() -> Rule {
    concat(
        "comment",
        [
            literal(';'),
            repeat0_inf(
                "*(WSP / VCHAR)",
                alts("WSP / VCHAR", [wsp(), vchar()]),
            ),
            crlf(),
        ],
    )
}

/// `alternation = concatenation *(*c-wsp "/" *c-wsp concatenation)`
pub fn alternation() -> Rule {
    concat(
        "alternation",
        [
            concatenation(),
            repeat0_inf(
                "*(*c-wsp \"/\" *c-wsp concatenation)",
                concat(
                    "*c-wsp \"/\" *c-wsp concatenation",
                    [
                        repeat0_inf("*c-wsp", c_wsp()),
                        literal('/'),
                        repeat0_inf("*c-wsp", c_wsp()),
                        concatenation(),
                    ],
                ),
            ),
        ],
    )
}

/// `concatenation = repetition *(1*c-wsp repetition)`
pub fn concatenation() -> Rule {
    concat(
        "concatenation",
        [
            repetition(),
            repeat0_inf(
                "*(1*c-wsp repetition)",
                concat(
                    "1*c-wsp repetition",
                    [repeat1_inf("1*c-wsp", c_wsp()), repetition()],
                ),
            ),
        ],
    )
}

/// `repetition = [repeat] element`
pub fn repetition() -> Rule {
    concat(
        "repetition",
        [optional("[repeat]", repeat()), element()],
    )
}

/// `repeat = (*DIGIT "*" *DIGIT) / 1*DIGIT`
pub fn repeat() -> Rule {
    alts(
        "repeat",
        [
            concat(
                "*DIGIT \"*\" *DIGIT",
                [
                    repeat0_inf("*DIGIT", digit()),
                    literal('*'),
                    repeat0_inf("*DIGIT", digit()),
                ],
            ),
            repeat1_inf("1*DIGIT", digit()),
        ],
    )
}

/// `element = rulename / group / option / char-val / num-val / prose-val`
pub fn element() -> Rule {
    alts(
        "element",
        [
            rulename(),
            group(),
            option(),
            char_val(),
            num_val(),
            prose_val(),
        ],
    )
}

/// `group = "(" *c-wsp alternation *c-wsp ")"`
pub fn group() -> Rule {
    concat(
        "group",
        [
            literal('('),
            repeat0_inf("*c-wsp", c_wsp()),
            lazy("alternation", alternation),
            repeat0_inf("*c-wsp", c_wsp()),
            literal(')'),
        ],
    )
}

/// `option = "[" *c-wsp alternation *c-wsp "]"`
pub fn option() -> Rule {
    concat(
        "option",
        [
            literal('['),
            repeat0_inf("*c-wsp", c_wsp()),
            lazy("alternation", alternation),
            repeat0_inf("*c-wsp", c_wsp()),
            literal(']'),
        ],
    )
}
