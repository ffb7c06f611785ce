use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured record extracted from lab-report text.
///
/// Every header field is optional: scanned and faxed reports routinely omit
/// or garble labels, and a missing label is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ParsedLabDocument {
    pub patient: PatientHeader,
    pub meta: LabMeta,
    pub tests: Vec<LabResult>,
    /// Populated only when no result rows were found (orders without results).
    pub ordered_tests: Vec<OrderedTest>,
}

impl ParsedLabDocument {
    /// First analyte whose name contains `needle`, compared case-insensitively.
    pub fn find_test(&self, needle: &str) -> Option<&LabResult> {
        let needle = needle.to_lowercase();
        self.tests
            .iter()
            .find(|t| t.name.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientHeader {
    pub id: Option<String>,
    pub name: Option<String>,
    pub dob: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabMeta {
    pub collected: Option<String>,
    pub finalized: Option<String>,
}

/// One analyte row. `value` is always finite; rows that fail numeric
/// coercion never make it into a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabResult {
    pub name: String,
    pub value: f64,
    pub units: String,
    pub reference: String,
    pub flag: Flag,
    /// Comparison prefix printed before the value, e.g. `<` in `<0.5`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub comparator: Option<Comparator>,
}

/// Per-analyte abnormality marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Flag {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "L")]
    Low,
    #[default]
    #[serde(rename = "N")]
    Normal,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::High => "H",
            Flag::Low => "L",
            Flag::Normal => "N",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Comparator {
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl Comparator {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<" => Some(Comparator::Less),
            "<=" => Some(Comparator::LessOrEqual),
            ">" => Some(Comparator::Greater),
            ">=" => Some(Comparator::GreaterOrEqual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::GreaterOrEqual => ">=",
        }
    }
}

/// An ordered test without a result yet, e.g. `CMP14 Comprehensive Panel (CMP14)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderedTest {
    pub code: String,
    pub name: String,
}
