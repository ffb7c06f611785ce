use std::sync::LazyLock;

use regex::Regex;
use wellpath_core::models::lab::OrderedTest;

use crate::normalize::collapse_whitespace;

// The regex engine has no back-references, so the "code repeated in
// parentheses" check happens after matching.
static RE_ORDERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?P<code>[A-Za-z0-9]{2,})[ \t]+(?P<name>[^\n]+?)[ \t]*\((?P<repeat>[A-Za-z0-9]{2,})\)[ \t]*$",
    )
    .expect("ordered test pattern")
});

/// Collect `<code> <name> (<code>)` lines, used for orders without results.
pub fn extract_ordered_tests(text: &str) -> Vec<OrderedTest> {
    RE_ORDERED
        .captures_iter(text)
        .filter(|caps| caps["code"] == caps["repeat"])
        .map(|caps| OrderedTest {
            code: caps["code"].to_string(),
            name: collapse_whitespace(&caps["name"]),
        })
        .collect()
}
