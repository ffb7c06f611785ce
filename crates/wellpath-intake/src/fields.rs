//! Field-level canonicalizers.
//!
//! Each takes one raw JSON value (string, number or boolean) and returns
//! `None` when the value is unset or unusable. `None` is the "unset"
//! state; none of these functions ever substitute zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wellpath_core::models::intake::Answer;

const YES: &[&str] = &["yes", "y", "true", "1"];
const NO: &[&str] = &["no", "n", "false", "0"];
const UNSURE: &[&str] = &["unsure", "not sure", "unknown", "don't know", "dont know", "idk"];

/// Inclusive numeric range used for clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Trimmed textual form of a primitive JSON value.
///
/// Numbers and booleans are rendered as text so free-text and typed
/// payloads go through the same vocabulary checks.
pub fn raw_text(raw: &Value) -> Option<String> {
    let text = match raw {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// `yes`/`no` answer; anything outside the vocabulary is unset.
pub fn yes_no(raw: &Value) -> Option<Answer> {
    match yes_no_unsure(raw)? {
        Answer::Unsure => None,
        answer => Some(answer),
    }
}

/// `yes`/`no`/`unsure` answer; anything outside the vocabulary is unset.
pub fn yes_no_unsure(raw: &Value) -> Option<Answer> {
    let text = raw_text(raw)?.to_lowercase();
    let text = text.as_str();
    if YES.contains(&text) {
        Some(Answer::Yes)
    } else if NO.contains(&text) {
        Some(Answer::No)
    } else if UNSURE.contains(&text) {
        Some(Answer::Unsure)
    } else {
        None
    }
}

/// Parse a number and clamp it into `bounds`.
///
/// Out-of-range values are pulled to the nearest boundary rather than
/// rejected. Blank, non-numeric and non-finite input is unset.
pub fn to_number(raw: &Value, bounds: Bounds) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !value.is_finite() {
        return None;
    }
    Some(bounds.clamp(value))
}

/// Canonicalize an `MMDDYYYY` date, tolerating any separators.
///
/// Non-digits are stripped first, so `01/15/2024` and `01-15-2024` both
/// work. Exactly eight digits are required, the year must fall in
/// 1900..=2100, and the date must exist on the calendar (Feb 30 fails).
pub fn date_from_digits(raw: &str) -> Option<jiff::civil::Date> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 8 {
        return None;
    }

    let month: i8 = digits[0..2].parse().ok()?;
    let day: i8 = digits[2..4].parse().ok()?;
    let year: i16 = digits[4..8].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || !(1900..=2100).contains(&year) {
        return None;
    }

    jiff::civil::Date::new(year, month, day).ok()
}
