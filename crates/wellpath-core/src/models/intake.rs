use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blank;

/// Questionnaire answers after canonicalization.
///
/// Mirrors the raw payload: known fields are canonicalized, unknown keys
/// are carried through untouched in `extra`. Unset or invalid answers are
/// `None`, which serializes as `""` for text, number, date and yes/no
/// fields and as `null` for coded fields (`diabetesType`,
/// `understandCondition`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedIntake {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, with = "blank")]
    pub date_of_birth: Option<jiff::civil::Date>,

    #[serde(default, with = "blank")]
    pub height_feet: Option<f64>,
    #[serde(default, with = "blank")]
    pub height_inches: Option<f64>,
    #[serde(default, with = "blank")]
    pub weight_lbs: Option<f64>,

    #[serde(default, with = "blank")]
    pub diabetes: Option<Answer>,
    #[serde(default)]
    pub diabetes_type: Option<u8>,
    #[serde(default, with = "blank")]
    pub high_blood_pressure: Option<Answer>,
    #[serde(default, with = "blank")]
    pub high_cholesterol: Option<Answer>,
    #[serde(default, with = "blank")]
    pub smoker: Option<Answer>,
    #[serde(default, with = "blank")]
    pub head_injury: Option<Answer>,
    #[serde(default, with = "blank")]
    pub sleep_apnea: Option<Answer>,

    #[serde(default, with = "blank")]
    pub family_history_dementia: Option<Answer>,
    #[serde(default, with = "blank")]
    pub memory_concerns: Option<Answer>,
    #[serde(default, with = "blank")]
    pub hearing_loss: Option<Answer>,

    #[serde(default, with = "blank")]
    pub sleep_hours: Option<f64>,
    #[serde(default, with = "blank")]
    pub exercise_days_per_week: Option<f64>,
    #[serde(default, with = "blank")]
    pub alcohol_drinks_per_week: Option<f64>,
    #[serde(default, with = "blank")]
    pub stress_level: Option<f64>,

    #[serde(default, with = "blank")]
    pub xpresso_score: Option<f64>,
    #[serde(default, with = "blank")]
    pub moca_score: Option<f64>,
    #[serde(default, with = "blank")]
    pub mmse_score: Option<f64>,
    #[serde(default)]
    pub current_test_type: String,
    #[serde(default, with = "blank")]
    pub current_test_score: Option<f64>,
    #[serde(default)]
    pub past_test_type: String,
    #[serde(default, with = "blank")]
    pub past_test_score: Option<f64>,
    #[serde(default, with = "blank")]
    pub past_test_date: Option<jiff::civil::Date>,

    #[serde(default)]
    pub understand_condition: Option<u8>,

    /// Keys the normalizer does not know about, passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NormalizedIntake {
    /// Look up a numeric field by its camelCase key.
    ///
    /// Used by configurable score sources, which name their field rather
    /// than reaching into the struct directly.
    pub fn number(&self, key: &str) -> Option<f64> {
        match key {
            "heightFeet" => self.height_feet,
            "heightInches" => self.height_inches,
            "weightLbs" => self.weight_lbs,
            "sleepHours" => self.sleep_hours,
            "exerciseDaysPerWeek" => self.exercise_days_per_week,
            "alcoholDrinksPerWeek" => self.alcohol_drinks_per_week,
            "stressLevel" => self.stress_level,
            "xpressoScore" => self.xpresso_score,
            "mocaScore" => self.moca_score,
            "mmseScore" => self.mmse_score,
            "currentTestScore" => self.current_test_score,
            "pastTestScore" => self.past_test_score,
            _ => self.extra.get(key).and_then(serde_json::Value::as_f64),
        }
    }
}

/// Canonical yes/no/unsure answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Unsure,
}
