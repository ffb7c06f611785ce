use serde_json::json;
use wellpath_core::models::metrics::{BmiBand, Triggers};
use wellpath_intake::{bmi_band, compute_bmi, derive_triggers, diabetes_type, understand_condition};

#[test]
fn bmi_from_imperial_height_and_weight() {
    let bmi = compute_bmi(5.0, 10.0, 160.0).unwrap();
    assert!((bmi - 22.97).abs() <= 0.01, "bmi was {bmi}");
}

#[test]
fn bmi_is_rounded_to_two_decimals() {
    let bmi = compute_bmi(6.0, 0.0, 200.0).unwrap();
    assert_eq!(bmi, 27.12);
}

#[test]
fn bmi_requires_weight_and_height() {
    assert_eq!(compute_bmi(5.0, 10.0, 0.0), None);
    assert_eq!(compute_bmi(0.0, 0.0, 160.0), None);
    assert_eq!(compute_bmi(5.0, 10.0, -3.0), None);
}

#[test]
fn bmi_bands() {
    assert_eq!(bmi_band(22.0), BmiBand::Low);
    assert_eq!(bmi_band(23.0), BmiBand::NormalHighrisk);
    assert_eq!(bmi_band(25.0), BmiBand::NormalHighrisk);
    assert_eq!(bmi_band(26.0), BmiBand::Over25);
    assert_eq!(bmi_band(18.4), BmiBand::Low);
}

#[test]
fn low_band_compares_whole_units() {
    assert_eq!(bmi_band(22.5), BmiBand::Low);
    assert_eq!(bmi_band(22.97), BmiBand::Low);
    assert_eq!(bmi_band(23.0), BmiBand::NormalHighrisk);
}

#[test]
fn over25_band_compares_exact_value() {
    assert_eq!(bmi_band(25.0), BmiBand::NormalHighrisk);
    assert_eq!(bmi_band(25.01), BmiBand::Over25);
    assert_eq!(bmi_band(25.6), BmiBand::Over25);
    assert_eq!(bmi_band(25.9), BmiBand::Over25);
}

#[test]
fn triggers_follow_condition_code() {
    assert_eq!(
        derive_triggers(Some(1)),
        Triggers {
            is_prevention_mode: true,
            is_symptom_mode: false
        }
    );
    assert_eq!(
        derive_triggers(Some(4)),
        Triggers {
            is_prevention_mode: false,
            is_symptom_mode: true
        }
    );
    assert_eq!(derive_triggers(Some(9)), Triggers::default());
    assert_eq!(derive_triggers(None), Triggers::default());
}

#[test]
fn condition_code_from_text_or_number() {
    assert_eq!(understand_condition(&json!("1. Preventative")), Some(1));
    assert_eq!(understand_condition(&json!("  3 - I have symptoms")), Some(3));
    assert_eq!(understand_condition(&json!(5)), Some(5));
    assert_eq!(understand_condition(&json!(4.0)), Some(4));
    assert_eq!(understand_condition(&json!(9)), None);
    assert_eq!(understand_condition(&json!("9")), None);
    assert_eq!(understand_condition(&json!("10")), None);
    assert_eq!(understand_condition(&json!(2.5)), None);
    assert_eq!(understand_condition(&json!("Preventative")), None);
    assert_eq!(understand_condition(&json!("0")), None);
}

#[test]
fn diabetes_type_mapping() {
    assert_eq!(diabetes_type(&json!("Type 1")), Some(1));
    assert_eq!(diabetes_type(&json!("type 2")), Some(2));
    assert_eq!(diabetes_type(&json!("2")), Some(2));
    assert_eq!(diabetes_type(&json!(1)), Some(1));
    assert_eq!(diabetes_type(&json!("gestational")), None);
    assert_eq!(diabetes_type(&json!("")), None);
}
