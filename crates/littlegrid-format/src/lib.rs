//! Littlegrid Format - cell value formatting for data grids.
//!
//! Turns raw JSON cell values into display strings. Every function in this
//! crate is total: a value that cannot be formatted renders as [`BLANK`]
//! (`"-"`) rather than producing an error, so one broken cell never breaks
//! a whole grid.
//!
//! # Rules
//!
//! [`CellFormatter::format`] applies these in order, first match wins:
//!
//! 1. **Blank**: null, a string form of `"NULL"` (any case), or whitespace
//!    only renders as `"-"`.
//! 2. **Money**: [`DisplayMode::Money`] renders `"{symbol} {amount:.2}"`.
//! 3. **Date**: [`DisplayMode::Date`] re-renders the value from one
//!    moment.js-style pattern to another. Unparseable dates render as `"-"`.
//! 4. **Plain**: the value's string form, unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use littlegrid_format::{CellFormatter, DisplayMode};
//! use serde_json::json;
//!
//! let formatter = CellFormatter::default();
//!
//! assert_eq!(formatter.format(&DisplayMode::Money, &json!("100")), "R 100.00");
//! assert_eq!(formatter.format(&DisplayMode::Money, &json!("")), "-");
//!
//! let date = DisplayMode::date("YYYY-MM-DD", "DD/MM/YYYY");
//! assert_eq!(formatter.format(&date, &json!("2024-03-05")), "05/03/2024");
//!
//! assert_eq!(formatter.format(&DisplayMode::Plain, &json!(null)), "-");
//! ```

mod date;
mod number;
mod value;

pub use date::{moment_to_strftime, reformat_date};
pub use number::{currency_format, is_finite_number, number_format, strip_leading_non_numeric};
pub use value::{display_string, is_blank, BLANK};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default currency symbol for money columns.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// How a column renders its non-blank values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum DisplayMode {
    /// String form of the value.
    #[default]
    Plain,
    /// Two-decimal amount prefixed by the currency symbol.
    Money,
    /// Date re-rendered from `source` pattern to `display` pattern.
    Date {
        /// moment.js-style pattern the raw values are written in.
        source: String,
        /// moment.js-style pattern to render with.
        display: String,
    },
}

impl DisplayMode {
    /// Create a date display mode.
    pub fn date(source: impl Into<String>, display: impl Into<String>) -> Self {
        DisplayMode::Date {
            source: source.into(),
            display: display.into(),
        }
    }

    /// Resolve a display mode from column flags.
    ///
    /// Money wins over dates; a date mode needs both patterns.
    pub fn from_flags(money: bool, source: Option<&str>, display: Option<&str>) -> Self {
        match (money, source, display) {
            (true, _, _) => DisplayMode::Money,
            (false, Some(source), Some(display)) => DisplayMode::date(source, display),
            _ => DisplayMode::Plain,
        }
    }
}

/// Formats raw cell values for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFormatter {
    /// Symbol used by [`DisplayMode::Money`] cells.
    pub currency_symbol: String,
}

impl Default for CellFormatter {
    fn default() -> Self {
        CellFormatter {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CellFormatter {
    /// Create a formatter with the given currency symbol.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        CellFormatter {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Format one raw value for display.
    pub fn format(&self, mode: &DisplayMode, value: &Value) -> String {
        let Some(text) = display_string(value) else {
            return BLANK.to_string();
        };
        if value::is_blank_text(&text) {
            return BLANK.to_string();
        }

        match mode {
            DisplayMode::Plain => text,
            DisplayMode::Money => currency_format(&self.currency_symbol, &text),
            DisplayMode::Date { source, display } => reformat_date(&text, source, display)
                .unwrap_or_else(|| {
                    tracing::debug!(value = %text, pattern = %source, "unparseable date rendered blank");
                    BLANK.to_string()
                }),
        }
    }

    /// Format a possibly missing value.
    pub fn format_opt(&self, mode: &DisplayMode, value: Option<&Value>) -> String {
        self.format(mode, value.unwrap_or(&Value::Null))
    }
}

/// Format a value with the default formatter (currency symbol `"R"`).
pub fn format_value(mode: &DisplayMode, value: &Value) -> String {
    CellFormatter::default().format(mode, value)
}
