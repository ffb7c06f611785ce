use serde_json::json;
use wellpath_core::from_json_str;
use wellpath_core::models::intake::{Answer, NormalizedIntake};
use wellpath_core::models::lab::{Comparator, Flag, LabResult, ParsedLabDocument};
use wellpath_core::models::metrics::{
    BmiBand, CognitionBand, CognitionBands, CognitionLevel, DerivedMetrics, Triggers,
};

#[test]
fn unset_intake_fields_serialize_as_blank_or_null() {
    let intake = NormalizedIntake::default();
    let value = serde_json::to_value(&intake).unwrap();

    assert_eq!(value["heightFeet"], json!(""));
    assert_eq!(value["dateOfBirth"], json!(""));
    assert_eq!(value["diabetes"], json!(""));
    assert_eq!(value["diabetesType"], json!(null));
    assert_eq!(value["understandCondition"], json!(null));
}

#[test]
fn set_intake_fields_serialize_canonically() {
    let intake = NormalizedIntake {
        weight_lbs: Some(160.0),
        smoker: Some(Answer::No),
        date_of_birth: Some(jiff::civil::date(1960, 3, 9)),
        ..Default::default()
    };
    let value = serde_json::to_value(&intake).unwrap();

    assert_eq!(value["weightLbs"], json!(160.0));
    assert_eq!(value["smoker"], json!("no"));
    assert_eq!(value["dateOfBirth"], json!("1960-03-09"));
}

#[test]
fn intake_round_trips_blank_fields_and_extra_keys() {
    let input = r#"{"heightFeet": "", "smoker": "yes", "favoriteColor": "teal"}"#;
    let intake: NormalizedIntake = from_json_str(input).unwrap();

    assert_eq!(intake.height_feet, None);
    assert_eq!(intake.smoker, Some(Answer::Yes));
    assert_eq!(intake.extra.get("favoriteColor"), Some(&json!("teal")));
}

#[test]
fn flags_serialize_as_single_letters() {
    let result = LabResult {
        name: "Glucose".to_string(),
        value: 104.0,
        units: "mg/dL".to_string(),
        reference: "70-99".to_string(),
        flag: Flag::High,
        comparator: None,
    };
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["flag"], json!("H"));
    assert!(value.get("comparator").is_none());
}

#[test]
fn comparator_is_kept_when_present() {
    let result = LabResult {
        name: "CRP".to_string(),
        value: 0.5,
        units: "mg/L".to_string(),
        reference: "0-3".to_string(),
        flag: Flag::Normal,
        comparator: Some(Comparator::Less),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["comparator"], json!("<"));
}

#[test]
fn document_uses_camel_case_keys() {
    let value = serde_json::to_value(ParsedLabDocument::default()).unwrap();
    assert!(value.get("orderedTests").is_some());
    assert_eq!(value["patient"]["name"], json!(null));
}

#[test]
fn find_test_is_case_insensitive() {
    let mut doc = ParsedLabDocument::default();
    doc.tests.push(LabResult {
        name: "Hemoglobin A1c".to_string(),
        value: 5.9,
        units: "%".to_string(),
        reference: "4.8-5.6".to_string(),
        flag: Flag::High,
        comparator: None,
    });

    assert_eq!(doc.find_test("hemoglobin a1c").map(|t| t.value), Some(5.9));
    assert!(doc.find_test("ferritin").is_none());
}

#[test]
fn metrics_use_snake_case_bands_and_camel_case_triggers() {
    let metrics = DerivedMetrics {
        bmi: Some(23.4),
        bmi_band: Some(BmiBand::NormalHighrisk),
        triggers: Triggers {
            is_prevention_mode: true,
            is_symptom_mode: false,
        },
        ..Default::default()
    };
    let value = serde_json::to_value(&metrics).unwrap();

    assert_eq!(value["bmiBand"], json!("normal_highrisk"));
    assert_eq!(value["triggers"]["isPreventionMode"], json!(true));
    assert_eq!(value["cognitionBands"], json!({}));
}

#[test]
fn cognition_bands_store_only_known_ids() {
    let band = CognitionBand {
        score: 27.0,
        band: CognitionLevel::Normal,
    };
    let mut bands = CognitionBands::default();

    assert!(!bands.set("moca8", band));
    assert!(bands.is_empty());
    assert!(bands.set("moca", band));
    assert_eq!(bands.moca, Some(band));
}
