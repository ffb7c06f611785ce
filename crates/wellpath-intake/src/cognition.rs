//! Cognition screening scales.
//!
//! Each scale is plain data: a score ceiling, a threshold ladder and an
//! ordered list of score sources. Sources are evaluated first-match-wins,
//! so changing where a score is taken from means reordering the list.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wellpath_core::models::intake::NormalizedIntake;
use wellpath_core::models::metrics::{CognitionBand, CognitionBands, CognitionLevel};

/// A lower bound on a ladder: scores `>= min` get `level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub min: f64,
    pub level: CognitionLevel,
}

/// Where a scale's score may come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreSource {
    /// A dedicated numeric field, e.g. `mocaScore`.
    ScaleField { key: String },
    /// `currentTestScore`, when `currentTestType` names this scale.
    CurrentTest,
    /// `pastTestScore`, when `pastTestType` names this scale.
    PastTest,
}

impl ScoreSource {
    pub fn resolve(&self, scale: &CognitionScale, intake: &NormalizedIntake) -> Option<f64> {
        match self {
            ScoreSource::ScaleField { key } => intake.number(key),
            ScoreSource::CurrentTest => scale
                .matches_type(&intake.current_test_type)
                .then_some(intake.current_test_score)
                .flatten(),
            ScoreSource::PastTest => scale
                .matches_type(&intake.past_test_type)
                .then_some(intake.past_test_score)
                .flatten(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitionScale {
    /// Lower-case identifier, also matched against declared test types.
    pub id: String,
    pub name: String,
    pub max_score: f64,
    /// Ordered from the highest threshold down. Scores under every
    /// threshold fall to `floor`.
    pub ladder: Vec<Threshold>,
    pub floor: CognitionLevel,
    pub sources: Vec<ScoreSource>,
}

impl CognitionScale {
    /// Whether a free-text test type (e.g. "MoCA 8.1") refers to this scale.
    pub fn matches_type(&self, test_type: &str) -> bool {
        test_type.to_lowercase().contains(&self.id)
    }

    pub fn band(&self, score: f64) -> CognitionLevel {
        self.ladder
            .iter()
            .find(|t| score >= t.min)
            .map_or(self.floor, |t| t.level)
    }

    /// First score produced by the source chain, clamped to the scale.
    pub fn resolve_score(&self, intake: &NormalizedIntake) -> Option<f64> {
        self.sources
            .iter()
            .find_map(|source| source.resolve(self, intake))
            .map(|score| score.clamp(0.0, self.max_score))
    }
}

fn default_sources(field: &str) -> Vec<ScoreSource> {
    vec![
        ScoreSource::ScaleField {
            key: field.to_string(),
        },
        ScoreSource::CurrentTest,
        ScoreSource::PastTest,
    ]
}

fn ladder(steps: [(f64, CognitionLevel); 3]) -> Vec<Threshold> {
    steps
        .into_iter()
        .map(|(min, level)| Threshold { min, level })
        .collect()
}

/// XpressO digital screen, scored 0–100.
pub fn xpresso() -> CognitionScale {
    CognitionScale {
        id: "xpresso".to_string(),
        name: "XpressO".to_string(),
        max_score: 100.0,
        ladder: ladder([
            (80.0, CognitionLevel::Normal),
            (60.0, CognitionLevel::Mild),
            (40.0, CognitionLevel::Moderate),
        ]),
        floor: CognitionLevel::Severe,
        sources: default_sources("xpressoScore"),
    }
}

/// Montreal Cognitive Assessment, scored 0–30.
pub fn moca() -> CognitionScale {
    CognitionScale {
        id: "moca".to_string(),
        name: "MoCA".to_string(),
        max_score: 30.0,
        ladder: ladder([
            (26.0, CognitionLevel::Normal),
            (18.0, CognitionLevel::Mild),
            (10.0, CognitionLevel::Moderate),
        ]),
        floor: CognitionLevel::Severe,
        sources: default_sources("mocaScore"),
    }
}

/// Mini-Mental State Examination, scored 0–30.
pub fn mmse() -> CognitionScale {
    CognitionScale {
        id: "mmse".to_string(),
        name: "MMSE".to_string(),
        max_score: 30.0,
        ladder: ladder([
            (24.0, CognitionLevel::Normal),
            (19.0, CognitionLevel::Mild),
            (10.0, CognitionLevel::Moderate),
        ]),
        floor: CognitionLevel::Severe,
        sources: default_sources("mmseScore"),
    }
}

/// Return all built-in scales.
pub fn all_scales() -> Vec<CognitionScale> {
    vec![xpresso(), moca(), mmse()]
}

/// Look up a built-in scale by id.
pub fn get_scale(id: &str) -> Option<CognitionScale> {
    all_scales().into_iter().find(|s| s.id == id)
}

/// Score ceiling implied by a declared test type: 30 for MoCA/MMSE, 100
/// for XpressO and anything unrecognized.
pub fn cognition_max(test_type: &str) -> f64 {
    let lower = test_type.to_lowercase();
    if lower.contains("moca") || lower.contains("mmse") {
        30.0
    } else {
        100.0
    }
}

/// Clamp a generic test score into `0..=cognition_max(test_type)`.
pub fn clamp_cognition(score: f64, test_type: &str) -> f64 {
    score.clamp(0.0, cognition_max(test_type))
}

/// Band a score on the named built-in scale.
pub fn cognition_band(scale_id: &str, score: f64) -> Option<CognitionLevel> {
    get_scale(scale_id).map(|scale| scale.band(score))
}

/// Resolve and band every scale that has a score.
///
/// Only the built-in ids (`xpresso`, `moca`, `mmse`) have a slot in
/// [`CognitionBands`]; a custom scale must reuse one of them to be kept.
pub fn cognition_bands(intake: &NormalizedIntake, scales: &[CognitionScale]) -> CognitionBands {
    let mut bands = CognitionBands::default();
    for scale in scales {
        if let Some(score) = scale.resolve_score(intake) {
            let band = CognitionBand {
                score,
                band: scale.band(score),
            };
            if !bands.set(&scale.id, band) {
                debug!(scale = %scale.id, "no cognition slot for scale, band dropped");
            }
        }
    }
    bands
}
