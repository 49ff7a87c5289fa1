//! Property-based tests for value formatting.

use littlegrid_format::{
    currency_format, number_format, strip_leading_non_numeric, CellFormatter, DisplayMode,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn any_mode() -> impl Strategy<Value = DisplayMode> {
    prop_oneof![
        Just(DisplayMode::Plain),
        Just(DisplayMode::Money),
        Just(DisplayMode::date("YYYY-MM-DD", "DD/MM/YYYY")),
        Just(DisplayMode::date("DD-MM-YYYY HH:mm:ss", "D MMM YYYY")),
    ]
}

proptest! {
    /// Formatting never produces an empty cell.
    #[test]
    fn format_never_returns_empty(mode in any_mode(), text in ".*") {
        let out = CellFormatter::default().format(&mode, &Value::String(text));
        prop_assert!(!out.is_empty());
    }

    /// Whitespace-only values always render as a dash.
    #[test]
    fn whitespace_is_blank(mode in any_mode(), text in "[ \t\r\n]*") {
        let out = CellFormatter::default().format(&mode, &Value::String(text));
        prop_assert_eq!(out, "-");
    }

    /// Stripping never panics and never leaves leading whitespace behind.
    #[test]
    fn strip_is_total(text in ".*") {
        let stripped = strip_leading_non_numeric(&text);
        prop_assert!(text.contains(stripped.trim()));
    }

    /// Formatted numbers always carry exactly two decimals.
    #[test]
    fn number_format_has_two_decimals(n in -1.0e12f64..1.0e12f64) {
        let out = number_format(&n.to_string());
        let decimals = out.rsplit('.').next().unwrap_or_default();
        prop_assert_eq!(decimals.len(), 2);
    }

    /// Formatting is stable: reformatting a formatted number is a no-op.
    #[test]
    fn number_format_is_idempotent(cents in -100_000_000i64..100_000_000i64) {
        let n = cents as f64 / 100.0;
        let once = number_format(&n.to_string());
        prop_assert_eq!(number_format(&once), once.clone());
    }

    /// A currency amount is the symbol followed by the plain number.
    #[test]
    fn currency_is_symbol_plus_number(n in 0u32..1_000_000u32, symbol in "[A-Z$]{1,3}") {
        let raw = n.to_string();
        prop_assert_eq!(
            currency_format(&symbol, &raw),
            format!("{} {}", symbol, number_format(&raw))
        );
    }

    /// Dates written in the source pattern survive a round trip.
    #[test]
    fn date_round_trip(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
        let formatter = CellFormatter::default();
        let value = json!(format!("{:04}-{:02}-{:02}", year, month, day));
        let out = formatter.format(&DisplayMode::date("YYYY-MM-DD", "DD/MM/YYYY"), &value);
        prop_assert_eq!(out, format!("{:02}/{:02}/{:04}", day, month, year));
    }
}
