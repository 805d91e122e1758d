//! Value-level parsers shared by the property interpreters.

use chrono::NaiveDate;
use meishi_core::{Address, StructuredName};

use super::error::{ValueError, ValueResult};

/// Replaces the first escaped `\n` sequence with a real line break.
#[must_use]
pub fn unescape_newline(value: &str) -> String {
    value.replacen("\\n", "\n", 1)
}

/// Removes one outermost pair of double quotes from a parameter value.
///
/// The first `"` and the last `"` are dropped when both exist; a value with
/// fewer than two quotes is returned unchanged.
#[must_use]
pub fn strip_enclosing_quotes(value: &str) -> String {
    match (value.find('"'), value.rfind('"')) {
        (Some(first), Some(last)) if first < last => {
            let mut result = String::with_capacity(value.len() - 2);
            result.push_str(&value[..first]);
            result.push_str(&value[first + 1..last]);
            result.push_str(&value[last + 1..]);
            result
        }
        _ => value.to_string(),
    }
}

/// Builds a structured name from the `;`-separated positional components.
///
/// Missing trailing components default to the empty string; extra components
/// are dropped.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let mut parts = value.split(';');
    StructuredName {
        surname: parts.next().unwrap_or_default().to_string(),
        name: parts.next().unwrap_or_default().to_string(),
        additional_name: parts.next().unwrap_or_default().to_string(),
        prefix: parts.next().unwrap_or_default().to_string(),
        suffix: parts.next().unwrap_or_default().to_string(),
    }
}

/// Builds an address from the seven `;`-separated positional components.
///
/// The first two components stay absent when missing; the remaining five
/// default to the empty string. Extra components are dropped.
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts: Vec<&str> = value.split(';').collect();
    Address {
        post_office_box: parts.first().copied().map(str::to_owned),
        number: parts.get(1).copied().map(str::to_owned),
        street: parts.get(2).copied().unwrap_or_default().to_string(),
        city: parts.get(3).copied().unwrap_or_default().to_string(),
        region: parts.get(4).copied().unwrap_or_default().to_string(),
        postal_code: parts.get(5).copied().unwrap_or_default().to_string(),
        country: parts.get(6).copied().unwrap_or_default().to_string(),
    }
}

/// Reads a calendar date from the interchange date forms.
///
/// A 16-character compact date-time-zone value (`19960415T231000Z`) is
/// truncated to its date part. Eight characters are read as `YYYYMMDD`;
/// anything else falls back to ISO `YYYY-MM-DD`, then to an RFC 3339
/// date-time whose date part is taken.
///
/// ## Errors
/// Returns [`ValueError::InvalidDate`] when no form yields a valid calendar
/// date.
pub fn parse_date_value(raw: &str) -> ValueResult<NaiveDate> {
    let value = if raw.len() == 16 {
        raw.get(..8).unwrap_or(raw)
    } else {
        raw
    };

    if value.len() == 8 {
        return parse_compact_date(value)
            .ok_or_else(|| ValueError::InvalidDate(value.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }

    Err(ValueError::InvalidDate(value.to_string()))
}

/// Parses the compact `YYYYMMDD` form.
fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    let year = value.get(..4)?.parse().ok()?;
    let month = value.get(4..6)?.parse().ok()?;
    let day = value.get(6..8)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
