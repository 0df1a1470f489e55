//! Value ordering shared by queries and order-by.

use chrono::{NaiveDate, NaiveDateTime};
use gridlink_core::Value;
use std::cmp::Ordering;

/// Compares an attribute value against a query operand.
///
/// Returns `None` when the operand cannot be read as the value's type.
pub(crate) fn with_operand(value: &Value, rhs: &str) -> Option<Ordering> {
    match value {
        Value::Null | Value::Record(_) | Value::Object(_) => None,
        Value::I64(_) | Value::F64(_) => {
            let rhs = rhs.trim().parse::<f64>().ok()?;
            value.as_f64()?.partial_cmp(&rhs)
        }
        Value::Bool(v) => Some(v.cmp(&rhs.trim().parse::<bool>().ok()?)),
        Value::Date(v) => Some(v.cmp(&parse_date(rhs)?)),
        Value::String(v) => Some(v.to_lowercase().cmp(&rhs.to_lowercase())),
        Value::Uuid(v) => Some(v.to_string().cmp(&rhs.to_lowercase())),
    }
}

/// Total order of attribute values used when sorting; nulls sort first.
pub(crate) fn values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => a.to_text().to_lowercase().cmp(&b.to_text().to_lowercase()),
        },
    }
}

/// Reads a date operand: ISO `YYYY-MM-DD`, `D!M!YYYY`, or the long form a
/// browser prints (`Tue Feb 27 2024 00:00:00 GMT+0000 (...)`).
pub(crate) fn parse_date(src: &str) -> Option<NaiveDate> {
    let src = src.trim();

    if let Some(date) = src
        .get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
    {
        return Some(date);
    }

    let parts: Vec<&str> = src.split('!').collect();
    if let [day, month, year] = parts[..] {
        return NaiveDate::from_ymd_opt(
            year.parse().ok()?,
            month.parse().ok()?,
            day.parse().ok()?,
        );
    }

    src.get(..24)
        .and_then(|head| NaiveDateTime::parse_from_str(head, "%a %b %d %Y %H:%M:%S").ok())
        .map(|datetime| datetime.date())
}
