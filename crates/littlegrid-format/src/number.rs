//! Number and currency formatting.
//!
//! All functions here are total: malformed input renders as [`BLANK`]
//! instead of failing.
//!
//! ```rust
//! use littlegrid_format::{currency_format, number_format, strip_leading_non_numeric};
//!
//! assert_eq!(number_format("1234.5"), "1234.50");
//! assert_eq!(currency_format("R", "1234.5"), "R 1234.50");
//! assert_eq!(strip_leading_non_numeric("$ 42.10"), "42.10");
//! ```

use crate::value::BLANK;

/// Returns `true` if `s` parses as a finite real number.
///
/// Surrounding whitespace is ignored. `"inf"`, `"NaN"` and the empty string
/// are not finite numbers.
pub fn is_finite_number(s: &str) -> bool {
    parse_finite(s).is_some()
}

fn parse_finite(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Drops leading characters until the remainder starts with a digit.
///
/// Input that is already a finite number is returned unchanged. Input with
/// no digit at all yields an empty string.
pub fn strip_leading_non_numeric(s: &str) -> &str {
    if is_finite_number(s) {
        return s;
    }
    let trimmed = s.trim();
    // A single character is only a finite number when it is an ASCII digit.
    let start = trimmed
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());
    trimmed[start..].trim()
}

/// Renders `raw` with exactly two decimal places.
///
/// Leading non-numeric characters (currency signs, labels) are stripped
/// first. Empty or non-numeric input renders as [`BLANK`].
pub fn number_format(raw: &str) -> String {
    if raw.is_empty() {
        return BLANK.to_string();
    }
    match parse_finite(strip_leading_non_numeric(raw)) {
        // -0 renders as "0.00"
        Some(n) if n == 0.0 => format!("{:.2}", 0.0),
        Some(n) => format!("{:.2}", n),
        None => BLANK.to_string(),
    }
}

/// Renders `raw` as `"{symbol} {number}"`.
///
/// A lone space and anything [`number_format`] rejects render as [`BLANK`].
/// An empty symbol returns the bare formatted number.
pub fn currency_format(symbol: &str, raw: &str) -> String {
    if symbol.is_empty() {
        return number_format(raw);
    }
    if raw == " " {
        return BLANK.to_string();
    }
    let number = number_format(raw);
    if number == BLANK {
        number
    } else {
        format!("{} {}", symbol, number)
    }
}
