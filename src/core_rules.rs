//! Core rules of RFC 5234, Appendix B.
//!
//! Each function builds a fresh rule whose node carries the RFC name.

use crate::alts::alts;
use crate::concat::concat;
use crate::operator::Rule;
use crate::range::range;
use crate::repeat::repeat0_inf;
use crate::rune::rune;

/// `ALPHA = %x41-5A / %x61-7A` ; A-Z / a-z
pub fn alpha() -> Rule {
    alts(
        "ALPHA",
        [range("%x41-5A", 'A', 'Z'), range("%x61-7A", 'a', 'z')],
    )
}

/// `BIT = "0" / "1"`
pub fn bit() -> Rule {
    alts("BIT", [rune("0", '0'), rune("1", '1')])
}

/// `CHAR = %x01-7F` ; any 7-bit US-ASCII character, excluding NUL
pub fn char() -> Rule {
    range("CHAR", '\x01', '\x7F')
}

/// `CR = %x0D` ; carriage return
pub fn cr() -> Rule {
    rune("CR", '\r')
}

/// `CRLF = CR LF / LF`
///
/// The RFC only allows CR LF. A bare LF is accepted as well so that grammars
/// work on text with Unix line endings; a bare CR is still rejected.
pub fn crlf() -> Rule {
    alts("CRLF", [concat("CR LF", [cr(), lf()]), lf()])
}

/// `CTL = %x00-1F / %x7F` ; controls
pub fn ctl() -> Rule {
    alts(
        "CTL",
        [range("%x00-1F", '\x00', '\x1F'), rune("%x7F", '\x7F')],
    )
}

/// `DIGIT = %x30-39` ; 0-9
pub fn digit() -> Rule {
    range("DIGIT", '0', '9')
}

/// `DQUOTE = %x22` ; " (Double Quote)
pub fn dquote() -> Rule {
    rune("DQUOTE", '"')
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub fn hexdig() -> Rule {
    alts(
        "HEXDIG",
        [
            digit(),
            rune("A", 'A'),
            rune("B", 'B'),
            rune("C", 'C'),
            rune("D", 'D'),
            rune("E", 'E'),
            rune("F", 'F'),
        ],
    )
}

/// `HTAB = %x09` ; horizontal tab
pub fn htab() -> Rule {
    rune("HTAB", '\t')
}

/// `LF = %x0A` ; linefeed
pub fn lf() -> Rule {
    rune("LF", '\n')
}

/// `LWSP = *(WSP / CRLF WSP)` ; linear white space
///
/// Permits lines containing only white space. Do not use when defining mail
/// headers.
pub fn lwsp() -> Rule {
    repeat0_inf(
        "LWSP",
        alts(
            "WSP / CRLF WSP",
            [wsp(), concat("CRLF WSP", [crlf(), wsp()])],
        ),
    )
}

/// `OCTET = %x00-FF` ; 8 bits of data, matched as code points U+0000..=U+00FF
pub fn octet() -> Rule {
    range("OCTET", '\x00', '\u{FF}')
}

/// `SP = %x20`
pub fn sp() -> Rule {
    rune("SP", ' ')
}

/// `VCHAR = %x21-7E` ; visible (printing) characters
pub fn vchar() -> Rule {
    range("VCHAR", '\x21', '\x7E')
}

/// `WSP = SP / HTAB` ; white space
pub fn wsp() -> Rule {
    alts("WSP", [sp(), htab()])
}
