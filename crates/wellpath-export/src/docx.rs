use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// One line of rendered report Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Bullet(&'a str),
    /// A whole line wrapped in underscores, used for section footers.
    Note(&'a str),
    PageBreak,
    Blank,
    Text(&'a str),
}

/// Classify each line of the Markdown subset produced by
/// [`render_markdown`](crate::render::render_markdown):
/// `#`/`##`/`###` headings, `- ` bullets, `---` page breaks, `_note_`
/// lines, blank lines and body text (with inline `**bold**`).
pub fn parse_blocks(rendered: &str) -> Vec<Block<'_>> {
    rendered
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Block::Blank
            } else if trimmed == "---" || trimmed == "***" {
                Block::PageBreak
            } else if let Some(text) = trimmed.strip_prefix("### ") {
                Block::Heading { level: 3, text }
            } else if let Some(text) = trimmed.strip_prefix("## ") {
                Block::Heading { level: 2, text }
            } else if let Some(text) = trimmed.strip_prefix("# ") {
                Block::Heading { level: 1, text }
            } else if let Some(text) = trimmed.strip_prefix("- ") {
                Block::Bullet(text)
            } else if let Some(text) = trimmed
                .strip_prefix('_')
                .and_then(|t| t.strip_suffix('_'))
                .filter(|t| !t.is_empty())
            {
                Block::Note(text)
            } else {
                Block::Text(trimmed)
            }
        })
        .collect()
}

/// Build DOCX bytes from rendered report Markdown.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for block in parse_blocks(rendered) {
        let paragraph = match block {
            Block::Heading { level, text } => Paragraph::new()
                .style(&format!("Heading{level}"))
                .add_run(Run::new().add_text(text).fonts(font(&styles.heading_font))),
            Block::Bullet(text) => inline_runs(text, styles).into_iter().fold(
                Paragraph::new()
                    .align(AlignmentType::Left)
                    .add_run(body_run("\u{2022} ", styles)),
                Paragraph::add_run,
            ),
            Block::Note(text) => Paragraph::new().add_run(
                Run::new()
                    .add_text(text)
                    .italic()
                    .size(styles.note_size * 2)
                    .fonts(font(&styles.body_font)),
            ),
            Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            Block::Blank => Paragraph::new(),
            Block::Text(text) => inline_runs(text, styles)
                .into_iter()
                .fold(Paragraph::new().align(AlignmentType::Left), Paragraph::add_run),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn font(name: &str) -> RunFonts {
    RunFonts::new().ascii(name)
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(font(&styles.body_font))
}

/// Split on `**` markers: odd segments are bold. An unclosed marker leaves
/// the remainder as plain text.
fn inline_runs(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let segments: Vec<&str> = text.split("**").collect();
    let closed = segments.len() % 2 == 1;

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            let is_last = i == segments.len() - 1;
            if i % 2 == 1 && (closed || !is_last) {
                body_run(segment, styles).bold()
            } else if i % 2 == 1 {
                body_run(&format!("**{segment}"), styles)
            } else {
                body_run(segment, styles)
            }
        })
        .collect()
}
