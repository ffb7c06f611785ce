//! Flat PDF canvas backed by `printpdf`.
//!
//! Has no form fields, so the renderer always draws onto it in overlay
//! mode. Lets a host produce a lab summary without an external authoring
//! engine.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfPageIndex};

use crate::error::TemplateError;
use crate::template::{DocumentTemplate, FontFace, FontId, TextPlacement};

/// US Letter, in points.
pub const LETTER: (f32, f32) = (612.0, 792.0);

pub struct PdfCanvas {
    doc: Option<PdfDocumentReference>,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    fonts: Vec<IndirectFontRef>,
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

impl PdfCanvas {
    /// A single blank page of `size_pt` (width, height).
    pub fn new(title: &str, size_pt: (f32, f32)) -> Self {
        let (doc, page, layer) = PdfDocument::new(title, mm(size_pt.0), mm(size_pt.1), "Layer 1");
        Self {
            doc: Some(doc),
            pages: vec![(page, layer)],
            fonts: Vec::new(),
        }
    }

    pub fn letter(title: &str) -> Self {
        Self::new(title, LETTER)
    }

    fn document(&self) -> Result<&PdfDocumentReference, TemplateError> {
        self.doc
            .as_ref()
            .ok_or_else(|| TemplateError::Engine("document already saved".to_string()))
    }
}

impl DocumentTemplate for PdfCanvas {
    fn field_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn text_field(&self, name: &str) -> Result<String, TemplateError> {
        Err(TemplateError::FieldMissing(name.to_string()))
    }

    fn set_text_field(&mut self, name: &str, _value: &str) -> Result<(), TemplateError> {
        Err(TemplateError::FieldMissing(name.to_string()))
    }

    fn flatten(&mut self) -> Result<(), TemplateError> {
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn embed_font(&mut self, face: FontFace) -> Result<FontId, TemplateError> {
        let builtin = match face {
            FontFace::Helvetica => BuiltinFont::Helvetica,
            FontFace::HelveticaBold => BuiltinFont::HelveticaBold,
        };
        let font = self
            .document()?
            .add_builtin_font(builtin)
            .map_err(|e| TemplateError::Engine(e.to_string()))?;
        self.fonts.push(font);
        Ok(FontId(self.fonts.len() - 1))
    }

    fn draw_text(
        &mut self,
        page: usize,
        text: &str,
        placement: TextPlacement,
    ) -> Result<(), TemplateError> {
        let (page_index, layer_index) = *self.pages.get(page).ok_or(TemplateError::PageMissing(page))?;
        let font = self
            .fonts
            .get(placement.font.0)
            .ok_or_else(|| TemplateError::Engine(format!("unknown font {}", placement.font.0)))?;

        let layer = self.document()?.get_page(page_index).get_layer(layer_index);
        layer.use_text(text, placement.size, mm(placement.x), mm(placement.y), font);
        Ok(())
    }

    fn save(&mut self) -> Result<Vec<u8>, TemplateError> {
        let doc = self
            .doc
            .take()
            .ok_or_else(|| TemplateError::Engine("document already saved".to_string()))?;
        doc.save_to_bytes()
            .map_err(|e| TemplateError::Engine(e.to_string()))
    }
}
