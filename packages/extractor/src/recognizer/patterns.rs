//! Lexical classification of clause markers at the start of a paragraph.
//!
//! Classification is purely textual. Whether a marker actually opens a level
//! depends on the recognizer state (see `state.rs`).

use regex::Regex;
use std::sync::LazyLock;

/// Numeric marker: dot-separated integer groups ("1", "1.2", "10.3.4").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\s*").expect("valid regex"));

/// Letter marker: a single lowercase letter and a closing parenthesis ("a)").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]\))\s*").expect("valid regex"));

/// Roman marker: letters from the roman numeral alphabet and a closing parenthesis ("iv)").
///
/// This is a lexical match only; "vic)" is accepted.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ROMAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ivxlc]+\))\s*").expect("valid regex"));

/// Which pattern a paragraph matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Dot-separated number.
    Numeric,
    /// Single lowercase letter.
    Letter,
    /// Two or more roman numeral letters.
    Roman,
}

/// A marker found at the start of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Which pattern matched.
    pub kind: MarkerKind,
    /// The marker token, including the closing parenthesis for letters.
    pub token: &'a str,
    /// Everything after the marker and the whitespace following it.
    pub content: &'a str,
}

impl Marker<'_> {
    /// The letter of a `Letter` marker.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        match self.kind {
            MarkerKind::Letter => self.token.chars().next(),
            _ => None,
        }
    }
}

/// Classify the start of a trimmed paragraph.
///
/// Patterns are tried in priority order: numeric, letter, roman. Single
/// letters that are also roman numerals ("i)", "v)") classify as `Letter`;
/// the state machine decides which level they open.
///
/// # Examples
/// ```
/// use clause_extractor::recognizer::patterns::{classify, MarkerKind};
///
/// let marker = classify("1.2 Definitions").unwrap();
/// assert_eq!(marker.kind, MarkerKind::Numeric);
/// assert_eq!(marker.token, "1.2");
/// assert_eq!(marker.content, "Definitions");
///
/// assert!(classify("Plain text").is_none());
/// ```
#[must_use]
pub fn classify(line: &str) -> Option<Marker<'_>> {
    let patterns: [(&Regex, MarkerKind); 3] = [
        (&*NUMERIC_PATTERN, MarkerKind::Numeric),
        (&*LETTER_PATTERN, MarkerKind::Letter),
        (&*ROMAN_PATTERN, MarkerKind::Roman),
    ];

    patterns.into_iter().find_map(|(pattern, kind)| {
        let caps = pattern.captures(line)?;
        let whole = caps.get(0)?;
        let token = caps.get(1)?;
        Some(Marker {
            kind,
            token: token.as_str(),
            content: &line[whole.end()..],
        })
    })
}

/// Roman numeral digits, largest first, including subtractive pairs.
const ROMAN_DIGITS: [(u32, &str); 9] = [
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Write a positive number as a lowercase roman numeral.
fn to_roman(mut value: u32) -> String {
    let mut numeral = String::new();
    for (digit, symbol) in ROMAN_DIGITS {
        while value >= digit {
            numeral.push_str(symbol);
            value -= digit;
        }
    }
    numeral
}

/// Value of a well-formed roman token like "iv)".
///
/// Lexical matches that are not canonical numerals ("vic)", "iiii)") yield
/// `None`.
#[must_use]
pub fn roman_value(token: &str) -> Option<u32> {
    let numeral = token.strip_suffix(')').unwrap_or(token);
    if numeral.is_empty() {
        return None;
    }

    let values = numeral
        .chars()
        .map(|c| match c {
            'i' => Some(1),
            'v' => Some(5),
            'x' => Some(10),
            'l' => Some(50),
            'c' => Some(100),
            _ => None,
        })
        .collect::<Option<Vec<i64>>>()?;

    let mut total: i64 = 0;
    for (index, value) in values.iter().enumerate() {
        match values.get(index + 1) {
            Some(next) if next > value => total -= value,
            _ => total += value,
        }
    }

    let total = u32::try_from(total).ok().filter(|total| *total > 0)?;
    (to_roman(total) == numeral).then_some(total)
}

/// The roman numeral that follows a token like "iv)", without parenthesis.
#[must_use]
pub fn next_roman(token: &str) -> Option<String> {
    roman_value(token).map(|value| to_roman(value + 1))
}

/// The letter that alphabetically follows the letter of a token like "h)".
#[must_use]
pub fn next_letter(token: &str) -> Option<char> {
    let letter = token.chars().next()?;
    if !letter.is_ascii_lowercase() || letter == 'z' {
        return None;
    }
    char::from_u32(u32::from(letter) + 1)
}
