//! Text helpers used by the question filters.
//!
//! These are the small pure utilities the prompt filters delegate to:
//! shortcode substitution, paragraph normalization and the required-answer
//! check.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{CzEmojiError, Result};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_+\-]+):").expect("shortcode pattern is valid"));

/// Replace `:shortcode:` tokens with their emoji glyph.
///
/// Unknown shortcodes are left exactly as typed.
///
/// # Example
/// ```
/// assert_eq!(cz_emoji::text::emojize("ship :tada:"), "ship 🎉");
/// assert_eq!(cz_emoji::text::emojize(":not_an_emoji:"), ":not_an_emoji:");
/// ```
pub fn emojize(text: &str) -> String {
    SHORTCODE
        .replace_all(text, |caps: &Captures| match emojis::get_by_shortcode(&caps[1]) {
            Some(emoji) => emoji.as_str().to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Normalize line breaks in a free-text answer into paragraph breaks.
///
/// Lines are separated by newlines or by `|`, since a single-line prompt has
/// no other way to carry a break. Each line is trimmed, blank lines are
/// dropped and the rest are joined by a blank line.
pub fn normalize_breaks(text: &str) -> String {
    text.split(['\n', '|'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Require a non-empty answer, failing with `message` otherwise.
pub fn require_non_empty(text: &str, message: &str) -> Result<String> {
    if text.is_empty() {
        return Err(CzEmojiError::validation(message));
    }
    Ok(text.to_string())
}
