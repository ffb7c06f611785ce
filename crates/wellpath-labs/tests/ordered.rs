use wellpath_labs::parse_lab_text;

#[test]
fn ordered_tests_are_used_when_no_results_exist() {
    let text = "\
Patient: DOE, JANE
Tests Ordered
322000 Comp. Metabolic Panel (14) (322000)
001453 Hemoglobin A1c (001453)
005009 CBC With Differential/Platelet (005009)
";
    let doc = parse_lab_text(text);

    assert!(doc.tests.is_empty());
    let codes: Vec<_> = doc.ordered_tests.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["322000", "001453", "005009"]);
    assert_eq!(doc.ordered_tests[0].name, "Comp. Metabolic Panel (14)");
    assert_eq!(doc.ordered_tests[1].name, "Hemoglobin A1c");
}

#[test]
fn mismatched_codes_are_ignored() {
    let doc = parse_lab_text("322000 Comp. Metabolic Panel (999999)");
    assert!(doc.ordered_tests.is_empty());
}

#[test]
fn ordered_tests_are_skipped_when_results_exist() {
    let text = "\
001453 Hemoglobin A1c (001453)
Hemoglobin A1c 5.9 % 4.8-5.6 High
";
    let doc = parse_lab_text(text);

    assert_eq!(doc.tests.len(), 1);
    assert!(doc.ordered_tests.is_empty());
}
