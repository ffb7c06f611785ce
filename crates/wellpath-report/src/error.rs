use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("copy template parse error in '{name}': {message}")]
    TemplateParse { name: String, message: String },

    #[error("copy template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::TemplateRender(e.to_string())
    }
}
