//! Canonical form-fill keys and the values a lab document supplies for them.

use serde::{Deserialize, Serialize};
use wellpath_core::models::lab::{LabResult, ParsedLabDocument};

/// Analyte whose result is copied into the A1c fields.
pub const A1C_ANALYTE: &str = "hemoglobin a1c";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    PatientName,
    PatientId,
    Dob,
    Collected,
    Finalized,
    A1cValue,
    A1cUnits,
    A1cReference,
    A1cFlag,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::PatientName,
        FieldKey::PatientId,
        FieldKey::Dob,
        FieldKey::Collected,
        FieldKey::Finalized,
        FieldKey::A1cValue,
        FieldKey::A1cUnits,
        FieldKey::A1cReference,
        FieldKey::A1cFlag,
    ];

    /// Destination field name used when no override is configured.
    pub fn default_field_name(&self) -> &'static str {
        match self {
            FieldKey::PatientName => "patient_name",
            FieldKey::PatientId => "patient_id",
            FieldKey::Dob => "dob",
            FieldKey::Collected => "collected",
            FieldKey::Finalized => "finalized",
            FieldKey::A1cValue => "a1c_value",
            FieldKey::A1cUnits => "a1c_units",
            FieldKey::A1cReference => "a1c_reference",
            FieldKey::A1cFlag => "a1c_flag",
        }
    }
}

/// Text for every canonical key. Absent values are `""`.
pub fn field_values(document: &ParsedLabDocument) -> Vec<(FieldKey, String)> {
    let a1c = document.find_test(A1C_ANALYTE);
    FieldKey::ALL
        .into_iter()
        .map(|key| (key, field_value(key, document, a1c)))
        .collect()
}

fn field_value(key: FieldKey, document: &ParsedLabDocument, a1c: Option<&LabResult>) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    match key {
        FieldKey::PatientName => text(&document.patient.name),
        FieldKey::PatientId => text(&document.patient.id),
        FieldKey::Dob => text(&document.patient.dob),
        FieldKey::Collected => text(&document.meta.collected),
        FieldKey::Finalized => text(&document.meta.finalized),
        FieldKey::A1cValue => a1c.map(display_value).unwrap_or_default(),
        FieldKey::A1cUnits => a1c.map(|t| t.units.clone()).unwrap_or_default(),
        FieldKey::A1cReference => a1c.map(|t| t.reference.clone()).unwrap_or_default(),
        FieldKey::A1cFlag => a1c.map(|t| t.flag.as_str().to_string()).unwrap_or_default(),
    }
}

/// Value as printed on the report, with any comparison prefix: `<0.5`, `5.9`.
pub fn display_value(result: &LabResult) -> String {
    match result.comparator {
        Some(cmp) => format!("{}{}", cmp.as_str(), result.value),
        None => result.value.to_string(),
    }
}
