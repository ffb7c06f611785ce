//! Labeled header scans.
//!
//! Five independent scans, one per header field. Each takes the first
//! match in the document; a missing label yields `None`.

use std::sync::LazyLock;

use regex::Regex;
use wellpath_core::models::lab::{LabMeta, PatientHeader};

const DATE: &str = r"\d{1,2}/\d{1,2}/\d{2,4}|\d{4}-\d{2}-\d{2}";
const TIME: &str = r"(?:[ \t]+\d{1,2}:\d{2}(?:[ \t]*[AaPp][Mm])?)?";

// The value stops at a run of two spaces or a tab, since vendors often put
// a second label on the same line ("Patient: DOE, JANE    DOB: ...").
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)(?:\bpatient(?:[ \t]+name)?|^[ \t]*name)[ \t]*:[ \t]*(?P<v>\S(?:[^\n\t]*?\S)?)(?:[ \t]{2,}|\t|$)",
    )
    .expect("patient name pattern")
});

static RE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:patient[ \t]*id|mrn|accession(?:[ \t]*(?:no\.?|number|#))?)[ \t]*[:#]?[ \t]*(?P<v>[A-Za-z0-9][A-Za-z0-9\-]*)",
    )
    .expect("patient id pattern")
});

static RE_DOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:dob|date[ \t]+of[ \t]+birth)[ \t]*:?[ \t]*(?P<v>{DATE})"
    ))
    .expect("dob pattern")
});

static RE_COLLECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\bcollect(?:ed|ion)(?:[ \t]+date)?[ \t]*:?[ \t]*(?P<v>(?:{DATE}){TIME})"
    ))
    .expect("collected pattern")
});

static RE_FINALIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:finali[sz]ed|final[ \t]+report|reported)(?:[ \t]+date)?[ \t]*:?[ \t]*(?P<v>(?:{DATE}){TIME})"
    ))
    .expect("finalized pattern")
});

/// Extract the patient header and report timestamps.
pub fn extract_header(text: &str) -> (PatientHeader, LabMeta) {
    let patient = PatientHeader {
        id: scan(&RE_ID, text),
        name: scan(&RE_NAME, text),
        dob: scan(&RE_DOB, text),
    };
    let meta = LabMeta {
        collected: scan(&RE_COLLECTED, text),
        finalized: scan(&RE_FINALIZED, text),
    };
    (patient, meta)
}

fn scan(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let value = caps.name("v")?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
