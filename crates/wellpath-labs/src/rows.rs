//! Analyte result-row sweep.
//!
//! One pattern is swept across the whole text:
//!
//! ```text
//! <name tokens> [<|<=|>|>=]<number> <unit> <reference: n | n-n> [High|Low|H|L]
//! ```
//!
//! Separators are `\s+`, so a row may continue across a line break, and the
//! sweep resumes immediately after each match. On irregularly wrapped text
//! this can merge two visual lines into one row, or consume the first word
//! of the next line as a flag (e.g. a following "High Sensitivity CRP" row).
//! That data loss is an accepted limitation awaiting a product decision;
//! the pattern is intentionally not line-bounded.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use wellpath_core::models::lab::{Comparator, Flag, LabResult};

use crate::normalize::collapse_whitespace;

static RE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?P<name>[A-Za-z][A-Za-z0-9 ,()/%+.'\-]*?)\s+(?:(?P<cmp><=|>=|<|>)\s*)?(?P<value>[0-9][0-9.,]*)\s+(?P<units>[^\s0-9][^\s]*)\s+(?P<reference>[0-9]+(?:\.[0-9]+)?(?:\s*-\s*[0-9]+(?:\.[0-9]+)?)?)(?:\s+(?P<flag>(?i:high|low|h|l))\b)?",
    )
    .expect("result row pattern")
});

/// Sweep `text` for analyte rows.
///
/// A row whose value does not coerce to a finite number is dropped; its
/// siblings are unaffected.
pub fn extract_results(text: &str) -> Vec<LabResult> {
    let mut results = Vec::new();

    for caps in RE_ROW.captures_iter(text) {
        let name = collapse_whitespace(&caps["name"]);
        let raw_value = &caps["value"];

        let Some(value) = coerce_value(raw_value) else {
            debug!(analyte = %name, raw_value, "dropping row with malformed value");
            continue;
        };

        results.push(LabResult {
            name,
            value,
            units: caps["units"].to_string(),
            reference: collapse_whitespace(&caps["reference"]),
            flag: normalize_flag(caps.name("flag").map(|m| m.as_str())),
            comparator: caps.name("cmp").and_then(|m| Comparator::parse(m.as_str())),
        });
    }

    results
}

/// Canonicalize a flag word: `High`/`H` → `H`, `Low`/`L` → `L`, anything
/// else (including absent) → `N`. Case-insensitive.
pub fn normalize_flag(raw: Option<&str>) -> Flag {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("high" | "h") => Flag::High,
        Some("low" | "l") => Flag::Low,
        _ => Flag::Normal,
    }
}

fn coerce_value(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
