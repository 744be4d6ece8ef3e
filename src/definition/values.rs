//! Terminal value notations: quoted strings, numeric values and prose.

use super::literal;
use crate::alts::alts;
use crate::concat::concat;
use crate::core_rules::{bit, digit, dquote, hexdig};
use crate::operator::Rule;
use crate::range::range;
use crate::repeat::{optional, repeat0_inf, repeat1_inf};

/// `char-val = case-insensitive-string / case-sensitive-string`
///
/// RFC 5234 only has the plain quoted string; the `%i` and `%s` prefixes
/// come from RFC 7405.
pub fn char_val() -> Rule {
    alts(
        "char-val",
        [case_insensitive_string(), case_sensitive_string()],
    )
}

/// `case-insensitive-string = [ "%i" ] quoted-string`
pub fn case_insensitive_string() -> Rule {
    concat(
        "case-insensitive-string",
        [
            optional("[ \"%i\" ]", concat("\"%i\"", [literal('%'), literal('i')])),
            quoted_string(),
        ],
    )
}

/// `case-sensitive-string = "%s" quoted-string`
pub fn case_sensitive_string() -> Rule {
    concat(
        "case-sensitive-string",
        [
            concat("\"%s\"", [literal('%'), literal('s')]),
            quoted_string(),
        ],
    )
}

/// `quoted-string = DQUOTE *(%x20-21 / %x23-7E) DQUOTE`
///
/// Any printable character and space, except the double quote itself.
pub fn quoted_string() -> Rule {
    concat(
        "quoted-string",
        [
            dquote(),
            repeat0_inf(
                "*(%x20-21 / %x23-7E)",
                alts(
                    "%x20-21 / %x23-7E",
                    [range("%x20-21", ' ', '!'), range("%x23-7E", '#', '~')],
                ),
            ),
            dquote(),
        ],
    )
}

/// `num-val = "%" (bin-val / dec-val / hex-val)`
pub fn num_val() -> Rule {
    concat(
        "num-val",
        [
            literal('%'),
            alts("bin-val / dec-val / hex-val", [bin_val(), dec_val(), hex_val()]),
        ],
    )
}

/// `bin-val = "b" 1*BIT [ 1*("." 1*BIT) / ("-" 1*BIT) ]`
///
/// Concatenated bit values or a single range.
pub fn bin_val() -> Rule {
    base_val("bin-val", 'b', "BIT", bit)
}

/// `dec-val = "d" 1*DIGIT [ 1*("." 1*DIGIT) / ("-" 1*DIGIT) ]`
pub fn dec_val() -> Rule {
    base_val("dec-val", 'd', "DIGIT", digit)
}

/// `hex-val = "x" 1*HEXDIG [ 1*("." 1*HEXDIG) / ("-" 1*HEXDIG) ]`
///
/// The `x` may be either case, like every quoted literal, but `HEXDIG` is
/// upper-case only: lower-case hex digits are not accepted.
pub fn hex_val() -> Rule {
    base_val("hex-val", 'x', "HEXDIG", hexdig)
}

/// The shared shape of the three numeric notations, over `digit`
fn base_val(name: &'static str, base: char, digit_name: &str, digit: fn() -> Rule) -> Rule {
    let digits = || repeat1_inf(format!("1*{}", digit_name), digit());
    let dotted = format!("1*(\".\" 1*{})", digit_name);
    let ranged = format!("(\"-\" 1*{})", digit_name);

    concat(
        name,
        [
            literal(base),
            digits(),
            optional(
                format!("[ {} / {} ]", dotted, ranged),
                alts(
                    format!("{} / {}", dotted, ranged),
                    [
                        repeat1_inf(
                            dotted,
                            concat(format!("\".\" 1*{}", digit_name), [literal('.'), digits()]),
                        ),
                        concat(ranged, [literal('-'), digits()]),
                    ],
                ),
            ),
        ],
    )
}

/// `prose-val = "<" *(%x20-3D / %x3F-7E) ">"`
///
/// Bracketed free text, the escape hatch for rules that cannot be written
/// in ABNF.
pub fn prose_val() -> Rule {
    concat(
        "prose-val",
        [
            literal('<'),
            repeat0_inf(
                "*(%x20-3D / %x3F-7E)",
                alts(
                    "%x20-3D / %x3F-7E",
                    [range("%x20-3D", ' ', '='), range("%x3F-7E", '?', '~')],
                ),
            ),
            literal('>'),
        ],
    )
}
