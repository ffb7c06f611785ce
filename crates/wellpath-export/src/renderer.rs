//! Lab report rendering into a document template.
//!
//! A template that exposes fillable fields is filled and flattened;
//! anything else gets the header and analyte rows drawn at fixed
//! coordinates. A field or line that cannot be written degrades the output
//! and is reported as a [`FieldDiagnostic`]; it never aborts the document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wellpath_core::models::lab::ParsedLabDocument;

use crate::error::{ExportError, TemplateError};
use crate::fields::{FieldKey, display_value, field_values};
use crate::layout::OverlayLayout;
use crate::template::{DocumentTemplate, FontFace, TextPlacement};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Destination field names that replace the defaults, per canonical key.
    pub field_overrides: BTreeMap<FieldKey, String>,
    pub layout: OverlayLayout,
}

impl RenderOptions {
    pub fn field_name(&self, key: FieldKey) -> &str {
        self.field_overrides
            .get(&key)
            .map_or(key.default_field_name(), String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    FormFill,
    OverlayDraw,
}

/// A write that was skipped. `target` is the field name or drawn label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiagnostic {
    pub target: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub mode: RenderMode,
    pub diagnostics: Vec<FieldDiagnostic>,
}

#[derive(Debug, Clone, Default)]
pub struct LabReportRenderer {
    options: RenderOptions,
}

impl LabReportRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render `document` into `template` and return the finished bytes.
    ///
    /// The only errors are a missing template or document, and failures of
    /// the engine itself (fonts, flattening, serialization).
    pub fn render(
        &self,
        template: Option<&mut dyn DocumentTemplate>,
        document: Option<&ParsedLabDocument>,
    ) -> Result<RenderedReport, ExportError> {
        let template = template.ok_or(ExportError::MissingTemplate)?;
        let document = document.ok_or(ExportError::MissingDocument)?;

        let (mode, diagnostics) = if template.field_names().is_empty() {
            (RenderMode::OverlayDraw, self.draw_overlay(template, document)?)
        } else {
            (RenderMode::FormFill, self.fill_form(template, document)?)
        };

        let bytes = template.save()?;
        debug!(
            ?mode,
            skipped = diagnostics.len(),
            bytes = bytes.len(),
            "rendered lab report"
        );

        Ok(RenderedReport {
            bytes,
            mode,
            diagnostics,
        })
    }

    fn fill_form(
        &self,
        template: &mut dyn DocumentTemplate,
        document: &ParsedLabDocument,
    ) -> Result<Vec<FieldDiagnostic>, ExportError> {
        let mut diagnostics = Vec::new();

        for (key, value) in field_values(document) {
            let name = self.options.field_name(key);
            attempt(&mut diagnostics, name, template.set_text_field(name, &value));
        }

        template.flatten()?;
        Ok(diagnostics)
    }

    fn draw_overlay(
        &self,
        template: &mut dyn DocumentTemplate,
        document: &ParsedLabDocument,
    ) -> Result<Vec<FieldDiagnostic>, ExportError> {
        if template.page_count() == 0 {
            return Err(TemplateError::PageMissing(0).into());
        }

        let layout = &self.options.layout;
        let bold = template.embed_font(FontFace::HelveticaBold)?;
        let regular = template.embed_font(FontFace::Helvetica)?;
        let mut diagnostics = Vec::new();

        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let header = [
            ("Patient:", text(&document.patient.name)),
            ("Patient ID:", text(&document.patient.id)),
            ("DOB:", text(&document.patient.dob)),
            ("Collected:", text(&document.meta.collected)),
            ("Finalized:", text(&document.meta.finalized)),
        ];
        for ((label, value), y) in header.iter().zip(layout.header_ys) {
            let placement = TextPlacement {
                x: layout.header_x,
                y,
                size: layout.header_size,
                font: bold,
            };
            let line = format!("{label} {value}");
            attempt(
                &mut diagnostics,
                label,
                template.draw_text(0, line.trim_end(), placement),
            );
        }

        for (row, result) in document.tests.iter().take(layout.max_rows).enumerate() {
            let cells = [
                result.name.clone(),
                display_value(result),
                result.units.clone(),
                result.reference.clone(),
                result.flag.as_str().to_string(),
            ];
            for (cell, x) in cells.iter().zip(layout.columns) {
                let placement = TextPlacement {
                    x,
                    y: layout.row_y(row),
                    size: layout.row_size,
                    font: regular,
                };
                attempt(
                    &mut diagnostics,
                    &result.name,
                    template.draw_text(0, cell, placement),
                );
            }
        }

        Ok(diagnostics)
    }
}

/// Record a failed write instead of propagating it.
fn attempt(diagnostics: &mut Vec<FieldDiagnostic>, target: &str, outcome: Result<(), TemplateError>) {
    if let Err(e) = outcome {
        warn!(target_field = target, error = %e, "skipping template write");
        diagnostics.push(FieldDiagnostic {
            target: target.to_string(),
            reason: e.to_string(),
        });
    }
}
