use serde_json::Value;
use wellpath_core::models::metrics::Triggers;

use crate::fields::raw_text;

/// Map a diabetes-type answer to `1` or `2`.
///
/// Accepts `"type 1"`, `"Type 2"`, `"1"`, `2`; anything else is `None`.
pub fn diabetes_type(raw: &Value) -> Option<u8> {
    let text = raw_text(raw)?.to_lowercase();
    let compact: String = text.split_whitespace().collect();
    match compact.as_str() {
        "type1" | "1" => Some(1),
        "type2" | "2" => Some(2),
        _ => None,
    }
}

/// Extract the condition-understanding code (1–5).
///
/// Numeric input must be an integer in range. Free text must start with a
/// single digit in range, e.g. `"1. Preventative"` → 1; `"10"` is rejected.
pub fn understand_condition(raw: &Value) -> Option<u8> {
    match raw {
        Value::Number(n) => {
            let value = n.as_f64()?;
            if value.fract() == 0.0 && (1.0..=5.0).contains(&value) {
                Some(value as u8)
            } else {
                None
            }
        }
        Value::String(s) => {
            let mut chars = s.trim_start().chars();
            let digit = chars.next()?.to_digit(10)?;
            if chars.next().is_some_and(|c| c.is_ascii_digit()) {
                return None;
            }
            u8::try_from(digit).ok().filter(|d| (1..=5).contains(d))
        }
        _ => None,
    }
}

/// Narrative triggers from the condition-understanding code.
///
/// 1–2 select prevention mode, 3–5 symptom mode; no code selects neither.
pub fn derive_triggers(understand_condition: Option<u8>) -> Triggers {
    match understand_condition {
        Some(1 | 2) => Triggers {
            is_prevention_mode: true,
            is_symptom_mode: false,
        },
        Some(3..=5) => Triggers {
            is_prevention_mode: false,
            is_symptom_mode: true,
        },
        _ => Triggers::default(),
    }
}
