use serde_json::json;
use wellpath_core::models::intake::Answer;
use wellpath_intake::{Bounds, date_from_digits, to_number, yes_no, yes_no_unsure};

const SMALL: Bounds = Bounds::new(0.0, 15.0);

#[test]
fn to_number_clamps_to_the_boundary() {
    assert_eq!(to_number(&json!("999"), SMALL), Some(15.0));
    assert_eq!(to_number(&json!(-4), SMALL), Some(0.0));
    assert_eq!(to_number(&json!(" 7.5 "), SMALL), Some(7.5));
}

#[test]
fn to_number_distinguishes_unset_from_zero() {
    assert_eq!(to_number(&json!("abc"), SMALL), None);
    assert_eq!(to_number(&json!(""), SMALL), None);
    assert_eq!(to_number(&json!("   "), SMALL), None);
    assert_eq!(to_number(&json!(null), SMALL), None);
    assert_eq!(to_number(&json!(true), SMALL), None);
    assert_eq!(to_number(&json!("NaN"), SMALL), None);
    assert_eq!(to_number(&json!("inf"), SMALL), None);
    assert_eq!(to_number(&json!("0"), SMALL), Some(0.0));
}

#[test]
fn yes_no_vocabulary() {
    assert_eq!(yes_no(&json!(" Yes ")), Some(Answer::Yes));
    assert_eq!(yes_no(&json!("N")), Some(Answer::No));
    assert_eq!(yes_no(&json!(true)), Some(Answer::Yes));
    assert_eq!(yes_no(&json!(0)), Some(Answer::No));
    assert_eq!(yes_no(&json!("unsure")), None);
    assert_eq!(yes_no(&json!("maybe")), None);
}

#[test]
fn yes_no_unsure_vocabulary() {
    assert_eq!(yes_no_unsure(&json!("Not Sure")), Some(Answer::Unsure));
    assert_eq!(yes_no_unsure(&json!("no")), Some(Answer::No));
    assert_eq!(yes_no_unsure(&json!("sometimes")), None);
}

#[test]
fn dates_are_canonicalized_to_iso() {
    let date = date_from_digits("01152024").unwrap();
    assert_eq!(date.to_string(), "2024-01-15");

    let slashed = date_from_digits("01/15/2024").unwrap();
    assert_eq!(slashed, date);
}

#[test]
fn impossible_dates_are_rejected() {
    assert_eq!(date_from_digits("02302024"), None);
    assert_eq!(date_from_digits("13012024"), None);
    assert_eq!(date_from_digits("01001990"), None);
    assert_eq!(date_from_digits("01011899"), None);
    assert_eq!(date_from_digits("0115202"), None);
    assert_eq!(date_from_digits("011520245"), None);
    assert_eq!(date_from_digits(""), None);
}

#[test]
fn leap_days_follow_the_calendar() {
    assert!(date_from_digits("02292024").is_some());
    assert!(date_from_digits("02292023").is_none());
}
