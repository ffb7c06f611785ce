use thiserror::Error;

/// Failures reported by a [`DocumentTemplate`](crate::template::DocumentTemplate)
/// implementation.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template has no field named '{0}'")]
    FieldMissing(String),

    #[error("template has no page {0}")]
    PageMissing(usize),

    #[error("document engine error: {0}")]
    Engine(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no document template was supplied")]
    MissingTemplate,

    #[error("no parsed lab document was supplied")]
    MissingDocument,

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
