//! Lenient readers over entry metadata.
//!
//! Every reader is total: a missing, null or malformed value yields the
//! default (`0`, `None`, `false`) instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// Borrowed view over an entry's metadata with alias-aware lookups.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Returns the first non-null value among `keys`.
    pub fn raw(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find(|value| !value.is_null())
    }

    /// Numeric field, `0.0` when missing or malformed.
    pub fn number(&self, keys: &[&str]) -> f64 {
        self.raw(keys).map(coerce_number).unwrap_or(0.0)
    }

    /// Trimmed, non-empty string field.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        self.raw(keys).and_then(coerce_text)
    }

    /// Lower-cased text, handy for enum-like tags.
    pub fn tag(&self, keys: &[&str]) -> Option<String> {
        self.text(keys).map(|text| text.to_ascii_lowercase())
    }

    pub fn flag(&self, keys: &[&str]) -> Option<bool> {
        self.raw(keys).and_then(coerce_flag)
    }

    pub fn date(&self, keys: &[&str]) -> Option<NaiveDate> {
        self.raw(keys)
            .and_then(Value::as_str)
            .and_then(parse_date)
    }
}

pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}

pub fn coerce_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

/// Sums `f64` items starting from `+0.0`; an overflowing sum is `0.0`.
///
/// `Iterator::sum` folds from `-0.0`, which leaks a negative zero out of every
/// empty section.
pub trait Total: Iterator<Item = f64> + Sized {
    fn total(self) -> f64 {
        finite_or_zero(self.fold(0.0, |acc, value| acc + value))
    }
}

/// Maps `inf` and `NaN` to `0.0`.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl<I: Iterator<Item = f64>> Total for I {}

/// Divides, returning `0.0` for a (near) zero denominator or a non-finite result.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }
    let result = numerator / denominator;
    if result.is_finite() {
        result
    } else {
        0.0
    }
}
