//! Slide splitting.
//!
//! A deck is one block of Markdown where slides are separated by lines that
//! contain only the `===` delimiter. Whitespace around the delimiter on its
//! line is ignored; anything else on the line makes it ordinary content.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Slide;

/// The slide delimiter literal.
pub const SLIDE_DELIMITER: &str = "===";

/// Matches a whole line consisting of the delimiter and optional blanks.
static DELIMITER_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*===[ \t]*\r?$").unwrap());

/// Split raw deck text into slides.
///
/// Segments are trimmed and empty ones dropped, so indices are dense and
/// start at 0. Input with no delimiter yields a single slide (or none if it
/// is blank).
pub fn split_slides(raw: &str) -> Vec<Slide> {
    let slides: Vec<Slide> = DELIMITER_LINE_REGEX
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| Slide::new(index, segment))
        .collect();

    log::debug!("Split input into {} slides", slides.len());

    slides
}
