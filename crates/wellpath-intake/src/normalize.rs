use serde_json::{Map, Value};
use tracing::debug;
use wellpath_core::models::intake::{Answer, NormalizedIntake};

use crate::cognition::{cognition_max, mmse, moca, xpresso};
use crate::conditions::{diabetes_type, understand_condition};
use crate::fields::{Bounds, date_from_digits, raw_text, to_number, yes_no, yes_no_unsure};

const HEIGHT_FEET: Bounds = Bounds::new(0.0, 8.0);
const HEIGHT_INCHES: Bounds = Bounds::new(0.0, 11.0);
const WEIGHT_LBS: Bounds = Bounds::new(0.0, 1000.0);
const SLEEP_HOURS: Bounds = Bounds::new(0.0, 24.0);
const EXERCISE_DAYS: Bounds = Bounds::new(0.0, 7.0);
const ALCOHOL_DRINKS: Bounds = Bounds::new(0.0, 100.0);
const STRESS_LEVEL: Bounds = Bounds::new(1.0, 10.0);

/// Canonicalize a raw questionnaire object field by field.
///
/// Never fails. Invalid answers become unset; keys the normalizer does not
/// know are copied into `extra` unchanged.
pub fn normalize_intake(raw: &Map<String, Value>) -> NormalizedIntake {
    let mut fields = RawFields::new(raw);

    let current_test_type = fields.text("currentTestType");
    let past_test_type = fields.text("pastTestType");

    NormalizedIntake {
        first_name: fields.text("firstName"),
        last_name: fields.text("lastName"),
        date_of_birth: fields.date("dateOfBirth"),

        height_feet: fields.number("heightFeet", HEIGHT_FEET),
        height_inches: fields.number("heightInches", HEIGHT_INCHES),
        weight_lbs: fields.number("weightLbs", WEIGHT_LBS),

        diabetes: fields.yes_no("diabetes"),
        diabetes_type: fields.coded("diabetesType", diabetes_type),
        high_blood_pressure: fields.yes_no("highBloodPressure"),
        high_cholesterol: fields.yes_no("highCholesterol"),
        smoker: fields.yes_no("smoker"),
        head_injury: fields.yes_no("headInjury"),
        sleep_apnea: fields.yes_no("sleepApnea"),

        family_history_dementia: fields.yes_no_unsure("familyHistoryDementia"),
        memory_concerns: fields.yes_no_unsure("memoryConcerns"),
        hearing_loss: fields.yes_no_unsure("hearingLoss"),

        sleep_hours: fields.number("sleepHours", SLEEP_HOURS),
        exercise_days_per_week: fields.number("exerciseDaysPerWeek", EXERCISE_DAYS),
        alcohol_drinks_per_week: fields.number("alcoholDrinksPerWeek", ALCOHOL_DRINKS),
        stress_level: fields.number("stressLevel", STRESS_LEVEL),

        xpresso_score: fields.number("xpressoScore", Bounds::new(0.0, xpresso().max_score)),
        moca_score: fields.number("mocaScore", Bounds::new(0.0, moca().max_score)),
        mmse_score: fields.number("mmseScore", Bounds::new(0.0, mmse().max_score)),
        current_test_score: fields.number(
            "currentTestScore",
            Bounds::new(0.0, cognition_max(&current_test_type)),
        ),
        past_test_score: fields.number(
            "pastTestScore",
            Bounds::new(0.0, cognition_max(&past_test_type)),
        ),
        past_test_date: fields.date("pastTestDate"),
        current_test_type,
        past_test_type,

        understand_condition: fields.coded("understandCondition", understand_condition),

        extra: fields.into_rest(),
    }
}

/// Consumes known keys from a copy of the raw payload so that whatever is
/// left over can be passed through.
struct RawFields {
    rest: Map<String, Value>,
}

impl RawFields {
    fn new(raw: &Map<String, Value>) -> Self {
        Self { rest: raw.clone() }
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        self.rest.remove(key).filter(|v| !v.is_null())
    }

    /// Apply `canonicalize` to the field, logging when a present value is
    /// rejected. Only the key is logged; answers are patient data.
    fn canonical<T>(&mut self, key: &str, canonicalize: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let raw = self.take(key)?;
        let value = canonicalize(&raw);
        if value.is_none() && raw_text(&raw).is_some() {
            debug!(field = key, "dropping invalid intake value");
        }
        value
    }

    fn text(&mut self, key: &str) -> String {
        self.take(key)
            .as_ref()
            .and_then(raw_text)
            .unwrap_or_default()
    }

    fn number(&mut self, key: &str, bounds: Bounds) -> Option<f64> {
        self.canonical(key, |v| to_number(v, bounds))
    }

    fn yes_no(&mut self, key: &str) -> Option<Answer> {
        self.canonical(key, yes_no)
    }

    fn yes_no_unsure(&mut self, key: &str) -> Option<Answer> {
        self.canonical(key, yes_no_unsure)
    }

    fn date(&mut self, key: &str) -> Option<jiff::civil::Date> {
        self.canonical(key, |v| raw_text(v).and_then(|t| date_from_digits(&t)))
    }

    fn coded(&mut self, key: &str, decode: fn(&Value) -> Option<u8>) -> Option<u8> {
        self.canonical(key, decode)
    }

    fn into_rest(self) -> std::collections::BTreeMap<String, Value> {
        self.rest.into_iter().collect()
    }
}
