/// Replace typographic characters that PDF text extraction commonly emits
/// with their plain ASCII equivalents.
///
/// - non-breaking and figure/narrow spaces → space
/// - en dash, em dash, minus sign → `-`
/// - CRLF / CR → LF
pub fn normalize_text(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Collapse every run of whitespace (including line breaks) to one space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
