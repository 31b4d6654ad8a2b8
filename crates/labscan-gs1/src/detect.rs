//! Heuristic classification of scanned strings.

use std::sync::LazyLock;

use regex::Regex;

/// Textual stand-ins for FNC1 emitted by scanner firmwares: the GS1-128
/// symbology identifier and the ASCII group separator.
pub const FNC1_MARKERS: &[&str] = &["]C1", "\u{1D}"];

static PARENTHESIZED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\([0-9]{2}\)").expect("Invalid parenthesized AI regex"));

static DIGIT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}[0-9]+").expect("Invalid digit prefix regex"));

/// Returns true when `code` plausibly carries GS1 element strings.
///
/// Any FNC1 marker, a leading `(NN)`, or three leading digits is enough.
/// Plenty of plain numeric strings pass; callers rely on that looseness to
/// attempt decoding of ambiguous scanner output.
pub fn looks_like_gs1(code: &str) -> bool {
    FNC1_MARKERS.iter().any(|marker| code.contains(marker))
        || PARENTHESIZED_PREFIX.is_match(code)
        || DIGIT_PREFIX.is_match(code)
}

/// Removes every FNC1 marker; they carry no data.
pub(crate) fn strip_fnc1(code: &str) -> String {
    FNC1_MARKERS
        .iter()
        .fold(code.to_string(), |acc, marker| acc.replace(marker, ""))
}
