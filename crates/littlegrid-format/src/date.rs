//! Date re-rendering with moment.js-style patterns.
//!
//! Grid configurations describe dates with the token set popularised by
//! moment.js (`DD/MM/YYYY HH:mm`). Patterns are translated to chrono
//! strftime strings, the value is parsed with the source pattern and
//! rendered with the display pattern.
//!
//! | Token | Meaning | strftime |
//! |-------|---------|----------|
//! | `YYYY` / `YY` | year, 4 or 2 digits | `%Y` / `%y` |
//! | `MMMM` / `MMM` | month name, full or short | `%B` / `%b` |
//! | `MM` / `M` | month number, padded or not | `%m` / `%-m` |
//! | `DDDD` / `DDD` | day of year, padded or not | `%j` / `%-j` |
//! | `DD` / `D` | day of month, padded or not | `%d` / `%-d` |
//! | `dddd` / `ddd` | weekday name, full or short | `%A` / `%a` |
//! | `HH` / `H` | hour 0-23 | `%H` / `%-H` |
//! | `hh` / `h` | hour 1-12 | `%I` / `%-I` |
//! | `mm` / `m` | minute | `%M` / `%-M` |
//! | `ss` / `s` | second | `%S` / `%-S` |
//! | `SSS` | milliseconds | `%3f` |
//! | `A` / `a` | AM/PM, upper or lower | `%p` / `%P` |
//! | `ZZ` / `Z` | UTC offset, `+0200` or `+02:00` | `%z` / `%:z` |
//!
//! Text inside square brackets is copied literally: `[at] HH:mm`.

use std::fmt::Write;

use chrono::format::{parse, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Longest tokens first so `YYYY` wins over `YY`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("DDDD", "%j"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("DDD", "%-j"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
    ("Z", "%:z"),
];

/// Translates a moment.js-style pattern into a chrono strftime string.
///
/// ```rust
/// use littlegrid_format::moment_to_strftime;
///
/// assert_eq!(moment_to_strftime("DD-MM-YYYY HH:mm"), "%d-%m-%Y %H:%M");
/// assert_eq!(moment_to_strftime("[Day] D"), "Day %-d");
/// ```
pub fn moment_to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut out, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
            out.push_str(spec);
            rest = &rest[token.len()..];
            continue;
        }

        push_literal(&mut out, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

/// Parses `value` with the `source` pattern and renders it with `display`.
///
/// Parsing is lenient about trailing input (`"2024-03-05 10:00"` matches
/// `YYYY-MM-DD`). Missing parts default the way moment does: no time of day
/// is midnight, missing minutes and seconds are zero, a 12-hour hour without
/// `A`/`a` is AM, and a missing day or month is the first.
/// Returns `None` when the value does not describe a calendar date or the
/// display pattern needs information the value does not carry (an offset).
///
/// ```rust
/// use littlegrid_format::reformat_date;
///
/// assert_eq!(
///     reformat_date("2024-03-05", "YYYY-MM-DD", "DD/MM/YYYY"),
///     Some("05/03/2024".to_string())
/// );
/// assert_eq!(reformat_date("not a date", "YYYY-MM-DD", "DD/MM/YYYY"), None);
/// ```
pub fn reformat_date(value: &str, source: &str, display: &str) -> Option<String> {
    let source_fmt = moment_to_strftime(source);
    let mut parsed = Parsed::new();
    match parse(&mut parsed, value.trim(), StrftimeItems::new(&source_fmt)) {
        Ok(()) => {}
        Err(err) if err.kind() == ParseErrorKind::TooLong => {}
        Err(_) => return None,
    }

    let date = resolve_date(&mut parsed)?;
    let time = resolve_time(&mut parsed)?;
    let local = NaiveDateTime::new(date, time);

    let display_fmt = moment_to_strftime(display);
    let mut out = String::new();
    let written = match parsed.to_fixed_offset() {
        Ok(offset) => {
            let stamped = offset.from_local_datetime(&local).single()?;
            write!(out, "{}", stamped.format(&display_fmt))
        }
        Err(_) => write!(out, "{}", local.format(&display_fmt)),
    };
    written.ok().map(|_| out)
}

/// A year without a month means January, a year and month without a day
/// means the first. Ordinal and week dates are left alone.
fn resolve_date(parsed: &mut Parsed) -> Option<NaiveDate> {
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some();
    let by_week = parsed.ordinal().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.isoweek().is_some();

    if has_year && !by_week {
        if parsed.month().is_none() {
            parsed.set_month(1).ok()?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1).ok()?;
        }
    }
    parsed.to_naive_date().ok()
}

/// No time fields at all means midnight. Otherwise missing minutes and
/// seconds are zero and a 12-hour hour without a meridiem is AM.
fn resolve_time(parsed: &mut Parsed) -> Option<NaiveTime> {
    let has_time = parsed.hour_div_12().is_some()
        || parsed.hour_mod_12().is_some()
        || parsed.minute().is_some()
        || parsed.second().is_some()
        || parsed.nanosecond().is_some();
    if !has_time {
        return Some(NaiveTime::default());
    }

    if parsed.hour_mod_12().is_some() && parsed.hour_div_12().is_none() {
        parsed.set_ampm(false).ok()?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0).ok()?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0).ok()?;
    }
    if parsed.nanosecond().is_none() {
        parsed.set_nanosecond(0).ok()?;
    }
    parsed.to_naive_time().ok()
}
