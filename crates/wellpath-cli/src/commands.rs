use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::{info, warn};
use wellpath_core::models::context::ReportContext;
use wellpath_export::docx::generate_docx;
use wellpath_export::render::render_markdown;
use wellpath_export::styles::DocumentStyles;
use wellpath_export::{LabReportRenderer, PdfCanvas};
use wellpath_report::{AssemblyPayload, ContextBuilder};

use wellpath_cli::config::load_copy_config;

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}

pub fn parse_lab(input: &Path) -> Result<()> {
    let document = wellpath_labs::parse_lab_text(&read(input)?);
    print_json(&document)
}

pub fn intake(input: &Path) -> Result<()> {
    let outcome = wellpath_intake::process_intake_json(&read(input)?)
        .wrap_err_with(|| format!("invalid intake in {}", input.display()))?;
    print_json(&outcome)
}

fn build_context(payload: &Path, copy: Option<&Path>) -> Result<ReportContext> {
    let payload: AssemblyPayload = serde_json::from_str(&read(payload)?)
        .wrap_err_with(|| format!("invalid assembly payload in {}", payload.display()))?;
    let builder = ContextBuilder::new(load_copy_config(copy)?)?;
    Ok(builder.build(&payload)?)
}

pub fn context(payload: &Path, copy: Option<&Path>) -> Result<()> {
    print_json(&build_context(payload, copy)?)
}

pub fn render_lab(input: &Path, out: &Path) -> Result<()> {
    let document = wellpath_labs::parse_lab_text(&read(input)?);
    let mut canvas = PdfCanvas::letter("Lab Summary");

    let report = LabReportRenderer::default().render(Some(&mut canvas), Some(&document))?;
    for diagnostic in &report.diagnostics {
        warn!(target_field = %diagnostic.target, reason = %diagnostic.reason, "not drawn");
    }

    write(out, &report.bytes)
}

pub fn export(
    payload: &Path,
    out: &Path,
    copy: Option<&Path>,
    template: Option<&Path>,
) -> Result<()> {
    let context = build_context(payload, copy)?;
    let template = template.map(read).transpose()?;

    let markdown = render_markdown(&context, template.as_deref())?;
    let bytes = generate_docx(&markdown, &DocumentStyles::default())?;

    write(out, &bytes)
}
