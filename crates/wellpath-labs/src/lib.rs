//! wellpath-labs
//!
//! Turns text already extracted from a lab-report PDF into a
//! [`ParsedLabDocument`]. Pure and infallible: every scan tolerates missing
//! or garbled input and yields a best-effort partial record.

pub mod header;
pub mod normalize;
pub mod ordered;
pub mod rows;

use tracing::debug;
use wellpath_core::models::lab::ParsedLabDocument;

pub use normalize::normalize_text;
pub use rows::normalize_flag;

/// Parse extracted lab-report text.
///
/// Ordered-test stubs are only collected when no result rows matched, so a
/// resulted report never carries both.
pub fn parse_lab_text(text: &str) -> ParsedLabDocument {
    let text = normalize_text(text);

    let (patient, meta) = header::extract_header(&text);
    let tests = rows::extract_results(&text);
    let ordered_tests = if tests.is_empty() {
        ordered::extract_ordered_tests(&text)
    } else {
        Vec::new()
    };

    debug!(
        tests = tests.len(),
        ordered_tests = ordered_tests.len(),
        has_patient_name = patient.name.is_some(),
        "parsed lab text"
    );

    ParsedLabDocument {
        patient,
        meta,
        tests,
        ordered_tests,
    }
}
