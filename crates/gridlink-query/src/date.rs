//! Date operands of date filters.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Literal written for "before" date filters.
pub const LESS_THAN_PLACEHOLDER: &str = "!!2024-27-2!!";

/// Parses a date filter operand: `YYYY-MM-DD hh:mm:ss`, the ISO `T` form, or
/// a bare `YYYY-MM-DD`.
pub fn parse(src: &str) -> Option<NaiveDateTime> {
    let src = src.trim();

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(src, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(src, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// The long form a browser prints for a date, in UTC:
/// `Tue Feb 27 2024 00:00:00 GMT+0000 (Coordinated Universal Time)`.
pub fn long_form(date: NaiveDateTime) -> String {
    date.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        .to_string()
}

/// The collection's `D!M!YYYY` date format.
pub fn day_month_year(date: NaiveDateTime) -> String {
    format!("{}!{}!{}", date.day(), date.month(), date.year())
}
