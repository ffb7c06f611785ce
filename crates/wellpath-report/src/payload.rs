use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wellpath_core::models::metrics::DerivedMetrics;

/// Everything the context builder needs for one report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblyPayload {
    /// Raw questionnaire snapshot. Used for the greeting name and, when
    /// `derived` is absent, to recompute metrics.
    pub intake: Option<Map<String, Value>>,
    pub derived: Option<DerivedMetrics>,
    pub recommendations: Vec<RecommendationInput>,
    pub labs: Vec<String>,
    pub custom_sections: Vec<CustomSectionInput>,
    pub first_name: Option<String>,
    /// Defaults to today's date when absent.
    pub report_date: Option<String>,
    pub is_draft: bool,
    pub footer_banner: Option<String>,
    pub global_disclaimer: Option<String>,
    /// Footer overrides keyed by section id.
    pub section_footers: BTreeMap<String, String>,
}

/// A recommendation as produced upstream: either bare text or an object
/// using any of the accepted key spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationInput {
    Text(String),
    Entry(RecommendationEntry),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationEntry {
    pub title: Option<String>,
    pub heading: Option<String>,
    pub body: Option<String>,
    pub description: Option<String>,
    pub text: Option<String>,
}

/// A caller-supplied section appended after the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSectionInput {
    pub id: Option<String>,
    pub title: String,
    pub body: Option<String>,
    /// When present the section renders as a bullet list instead of `body`.
    pub items: Option<Vec<String>>,
    pub footer: Option<String>,
}
