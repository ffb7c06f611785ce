//! The document-authoring seam.
//!
//! The renderer never talks to a PDF engine directly. A host loads a
//! template with whatever engine it uses and hands it over behind this
//! trait. Coordinates are PDF points with the origin at the bottom-left of
//! the page.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Standard faces every engine is expected to provide without embedding a
/// font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

/// Handle returned by [`DocumentTemplate::embed_font`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub font: FontId,
}

pub trait DocumentTemplate {
    /// Names of the fillable text fields. Empty for a flat layout.
    fn field_names(&self) -> Vec<String>;

    fn text_field(&self, name: &str) -> Result<String, TemplateError>;

    fn set_text_field(&mut self, name: &str, value: &str) -> Result<(), TemplateError>;

    /// Bake field values into static page content and drop interactivity.
    fn flatten(&mut self) -> Result<(), TemplateError>;

    fn page_count(&self) -> usize;

    fn embed_font(&mut self, face: FontFace) -> Result<FontId, TemplateError>;

    fn draw_text(
        &mut self,
        page: usize,
        text: &str,
        placement: TextPlacement,
    ) -> Result<(), TemplateError>;

    /// Serialize the finished document.
    fn save(&mut self) -> Result<Vec<u8>, TemplateError>;
}
