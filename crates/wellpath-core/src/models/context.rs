use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metrics::Triggers;

/// Ordered, render-ready document model.
///
/// `sections[i].order == i` for every section; consumers render in array
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportContext {
    pub first_name: String,
    pub report_date: String,
    pub is_draft: bool,
    pub variant: TemplateVariant,
    pub triggers: Triggers,
    pub global_disclaimer: String,
    pub footer_banner: String,
    pub sections: Vec<ReportSection>,
    pub recommendations: Vec<Recommendation>,
    pub labs: Vec<String>,
}

impl ReportContext {
    pub fn section(&self, id: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Which intro/summary copy pair a report uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TemplateVariant {
    #[default]
    Default,
    Prevention,
    Symptom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportSection {
    pub id: String,
    pub title: String,
    pub content: SectionContent,
    pub footer: String,
    pub order: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum SectionContent {
    Text { body: String },
    Recommendations { items: Vec<Recommendation> },
    Bullets { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}
