//! wellpath-export
//!
//! Final document output:
//! - lab reports rendered into a caller-supplied document template, either
//!   by filling named form fields or by drawing at fixed coordinates
//! - report contexts rendered to Markdown (Tera) and DOCX

pub mod canvas;
pub mod docx;
pub mod error;
pub mod fields;
pub mod layout;
pub mod render;
pub mod renderer;
pub mod styles;
pub mod template;

pub use canvas::PdfCanvas;
pub use renderer::{FieldDiagnostic, LabReportRenderer, RenderMode, RenderOptions, RenderedReport};
pub use template::DocumentTemplate;
