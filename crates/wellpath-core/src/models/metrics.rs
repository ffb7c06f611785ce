use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk indicators computed from a normalized intake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DerivedMetrics {
    /// Positive and finite when present.
    pub bmi: Option<f64>,
    pub bmi_band: Option<BmiBand>,
    #[serde(default)]
    pub cognition_bands: CognitionBands,
    #[serde(default)]
    pub triggers: Triggers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiBand {
    Low,
    NormalHighrisk,
    Over25,
}

impl BmiBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiBand::Low => "low",
            BmiBand::NormalHighrisk => "normal_highrisk",
            BmiBand::Over25 => "over25",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CognitionLevel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitionBand {
    pub score: f64,
    pub band: CognitionLevel,
}

/// One entry per cognition scale that could be resolved from the intake.
///
/// The slots are fixed: only the `xpresso`, `moca` and `mmse` ids have a
/// place in the serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitionBands {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub xpresso: Option<CognitionBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub moca: Option<CognitionBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub mmse: Option<CognitionBand>,
}

impl CognitionBands {
    /// Store `band` in the slot for `scale_id`. Returns `false`, storing
    /// nothing, when the id has no slot.
    pub fn set(&mut self, scale_id: &str, band: CognitionBand) -> bool {
        let slot = match scale_id {
            "xpresso" => &mut self.xpresso,
            "moca" => &mut self.moca,
            "mmse" => &mut self.mmse,
            _ => return false,
        };
        *slot = Some(band);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.xpresso.is_none() && self.moca.is_none() && self.mmse.is_none()
    }
}

/// Narrative mode flags, both derived from the condition-understanding code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Triggers {
    pub is_prevention_mode: bool,
    pub is_symptom_mode: bool,
}
