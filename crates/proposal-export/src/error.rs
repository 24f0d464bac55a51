use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing required field: {0}")]
    RenderInput(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("PDF rendering failed: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(error_chain(&e))
    }
}

/// Tera keeps the useful part of a failure (missing variable, bad filter)
/// in the source chain, not in the top-level message.
pub(crate) fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
