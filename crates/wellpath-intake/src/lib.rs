//! wellpath-intake
//!
//! Questionnaire canonicalization and risk derivation. Pure data, no I/O.
//!
//! Every transform degrades to an empty value on bad input instead of
//! failing the payload: a noisy free-text answer costs one field, never the
//! whole intake.

pub mod bmi;
pub mod cognition;
pub mod conditions;
pub mod error;
pub mod fields;
pub mod normalize;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wellpath_core::models::intake::NormalizedIntake;
use wellpath_core::models::metrics::DerivedMetrics;

use cognition::CognitionScale;
use error::IntakeError;

pub use bmi::{bmi_band, compute_bmi};
pub use conditions::{derive_triggers, diabetes_type, understand_condition};
pub use cognition::{clamp_cognition, cognition_band, cognition_bands};
pub use fields::{Bounds, date_from_digits, to_number, yes_no, yes_no_unsure};
pub use normalize::normalize_intake;

/// Normalized answers together with the metrics derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeOutcome {
    pub intake: NormalizedIntake,
    pub metrics: DerivedMetrics,
}

/// Compute BMI, cognition bands and mode triggers with the built-in scales.
pub fn derive_metrics(intake: &NormalizedIntake) -> DerivedMetrics {
    derive_metrics_with(intake, &cognition::all_scales())
}

/// Like [`derive_metrics`], with caller-supplied cognition scales.
pub fn derive_metrics_with(intake: &NormalizedIntake, scales: &[CognitionScale]) -> DerivedMetrics {
    let bmi = compute_bmi(
        intake.height_feet.unwrap_or(0.0),
        intake.height_inches.unwrap_or(0.0),
        intake.weight_lbs.unwrap_or(0.0),
    );

    DerivedMetrics {
        bmi,
        bmi_band: bmi.map(bmi_band),
        cognition_bands: cognition::cognition_bands(intake, scales),
        triggers: derive_triggers(intake.understand_condition),
    }
}

/// Normalize a raw questionnaire object and derive its metrics.
pub fn process_intake(raw: &Map<String, Value>) -> IntakeOutcome {
    let intake = normalize_intake(raw);
    let metrics = derive_metrics(&intake);
    IntakeOutcome { intake, metrics }
}

/// Entry point for an undecoded payload. The only failure is a payload that
/// is not a JSON object at all.
pub fn process_intake_value(raw: &Value) -> Result<IntakeOutcome, IntakeError> {
    let object = raw.as_object().ok_or_else(|| IntakeError::NotAnObject(kind_of(raw)))?;
    Ok(process_intake(object))
}

/// Decode and process a JSON document.
pub fn process_intake_json(input: &str) -> Result<IntakeOutcome, IntakeError> {
    let value: Value = serde_json::from_str(input)?;
    process_intake_value(&value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
