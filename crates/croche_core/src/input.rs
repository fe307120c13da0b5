//! Coercion of user-entered text into counter values.
//!
//! # Invariants
//! - Coercion never fails; unparseable input becomes `0`.
//! - Only ASCII digits and `-` survive filtering, matching the numeric
//!   keyboard field of the value dialog.
//! - Non-ASCII decimal digits (e.g. Arabic-Indic `٣`) are dropped, not
//!   transliterated; input made only of them becomes `0`. Dart hosts that
//!   accept such digits must map them to ASCII before calling in.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9\-]+").expect("valid non-numeric regex"));

/// Value used when the text cannot be read as an integer.
pub const FALLBACK_COUNTER_VALUE: i64 = 0;

/// Drops every character the value field would not accept.
pub fn filter_counter_input(text: &str) -> String {
    NON_NUMERIC_RE.replace_all(text, "").into_owned()
}

/// Converts raw dialog text into a counter value.
///
/// Filters the text first, then parses it as `i64`. Empty text, a lone `-`,
/// misplaced signs and out-of-range numbers all yield
/// [`FALLBACK_COUNTER_VALUE`].
pub fn coerce_counter_value(text: &str) -> i64 {
    filter_counter_input(text)
        .parse::<i64>()
        .unwrap_or(FALLBACK_COUNTER_VALUE)
}
