use wellpath_labs::header::extract_header;
use wellpath_labs::parse_lab_text;

const REPORT: &str = "\
ACME Reference Laboratories
Patient Name: DOE, JANE    DOB: 03/09/1960
Patient ID: A-10442
Collected: 01/15/2024 08:30 AM
Finalized: 01/16/2024 14:02

Glucose 104 mg/dL 70-99 High
";

#[test]
fn all_header_fields_are_extracted() {
    let doc = parse_lab_text(REPORT);

    assert_eq!(doc.patient.name.as_deref(), Some("DOE, JANE"));
    assert_eq!(doc.patient.id.as_deref(), Some("A-10442"));
    assert_eq!(doc.patient.dob.as_deref(), Some("03/09/1960"));
    assert_eq!(doc.meta.collected.as_deref(), Some("01/15/2024 08:30 AM"));
    assert_eq!(doc.meta.finalized.as_deref(), Some("01/16/2024 14:02"));
    assert_eq!(doc.tests.len(), 1);
}

#[test]
fn missing_labels_yield_none() {
    let (patient, meta) = extract_header("Patient: SMITH, JOHN\nNothing else here");

    assert_eq!(patient.name.as_deref(), Some("SMITH, JOHN"));
    assert_eq!(patient.id, None);
    assert_eq!(patient.dob, None);
    assert_eq!(meta.collected, None);
    assert_eq!(meta.finalized, None);
}

#[test]
fn alternate_labels_are_recognized() {
    let text = "\
MRN: 998877
Date of Birth: 1958-11-30
Collection Date: 2024-02-01
Reported: 2024-02-03
";
    let (patient, meta) = extract_header(text);

    assert_eq!(patient.id.as_deref(), Some("998877"));
    assert_eq!(patient.dob.as_deref(), Some("1958-11-30"));
    assert_eq!(meta.collected.as_deref(), Some("2024-02-01"));
    assert_eq!(meta.finalized.as_deref(), Some("2024-02-03"));
}

#[test]
fn physician_name_label_is_not_the_patient() {
    let (patient, _) = extract_header("Ordering Physician Name: Dr. Ruiz\nPatient: LEE, ANN");
    assert_eq!(patient.name.as_deref(), Some("LEE, ANN"));
}
