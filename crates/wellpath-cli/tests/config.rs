use serde_json::json;
use wellpath_cli::config::{CURRENT_VERSION, migrate, parse_copy_config, to_file_json};
use wellpath_report::ReportCopyConfig;

#[test]
fn bare_copy_object_is_migrated() {
    let copy = parse_copy_config(r#"{ "footer_banner": "Private" }"#).unwrap();

    assert_eq!(copy.footer_banner, "Private");
    assert_eq!(
        copy.fallback_first_name,
        ReportCopyConfig::default().fallback_first_name
    );
}

#[test]
fn versioned_envelope_is_read_as_is() {
    let copy = parse_copy_config(
        r#"{ "config_version": 1, "copy": { "global_disclaimer": "Educational only." } }"#,
    )
    .unwrap();

    assert_eq!(copy.global_disclaimer, "Educational only.");
}

#[test]
fn migration_wraps_v0_in_envelope() {
    let migrated = migrate(json!({ "labs_title": "Labs" }), 0).unwrap();
    assert_eq!(
        migrated,
        json!({ "config_version": 1, "copy": { "labs_title": "Labs" } })
    );
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_copy_config(r#"{ "config_version": 99, "copy": {} }"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_is_rejected() {
    assert!(parse_copy_config("[1, 2]").is_err());
    assert!(parse_copy_config("not json").is_err());
}

#[test]
fn written_file_round_trips_at_current_version() {
    let mut copy = ReportCopyConfig::default();
    copy.footer_banner = "Internal".to_string();

    let written = to_file_json(&copy).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["config_version"], json!(CURRENT_VERSION));

    assert_eq!(parse_copy_config(&written).unwrap(), copy);
}
