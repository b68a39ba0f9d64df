//! Character classes used by the scanner.

use unicode_xid::UnicodeXID;

pub const LINE_FEED: char = '\n';
pub const SLASH: char = '/';
pub const DOT: char = '.';
pub const UNDERSCORE: char = '_';

/// Whitespace the scanner drops. Newline is a token, so it is excluded.
#[inline]
pub fn is_ignorable_space(ch: char) -> bool {
    ch.is_whitespace() && ch != LINE_FEED
}

/// Letter numbers (category Nl, e.g. roman numerals) are XID characters but
/// not letters.
const LETTER_NUMBERS: &[(char, char)] = &[
    ('\u{16EE}', '\u{16F0}'),
    ('\u{2160}', '\u{2182}'),
    ('\u{2185}', '\u{2188}'),
    ('\u{3007}', '\u{3007}'),
    ('\u{3021}', '\u{3029}'),
    ('\u{3038}', '\u{303A}'),
    ('\u{A6E6}', '\u{A6EF}'),
    ('\u{10140}', '\u{10174}'),
    ('\u{10341}', '\u{10341}'),
    ('\u{1034A}', '\u{1034A}'),
    ('\u{103D1}', '\u{103D5}'),
    ('\u{12400}', '\u{1246E}'),
];

fn is_letter_number(ch: char) -> bool {
    LETTER_NUMBERS.iter().any(|&(lo, hi)| (lo..=hi).contains(&ch))
}

/// Check if a character can start a keyword or identifier. Only letters do.
#[inline]
pub fn is_word_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || (!ch.is_ascii() && ch.is_xid_start() && !is_letter_number(ch))
}

/// Decimal digits outside ASCII. Superscripts and fractions are not XID
/// characters and fall out here.
fn is_unicode_digit(ch: char) -> bool {
    ch.is_numeric() && ch.is_xid_continue() && !is_letter_number(ch)
}

/// Check if a character can continue a keyword, identifier or number suffix.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == UNDERSCORE
        || (!ch.is_ascii() && (is_word_start(ch) || is_unicode_digit(ch)))
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Suffixes allowed on integer literals.
pub const INTEGER_SUFFIXES: &[&str] = &[
    "", "u", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64",
];

/// Suffixes allowed on float literals.
pub const FLOAT_SUFFIXES: &[&str] = &["", "d", "f"];
