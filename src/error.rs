use folio_core::{ParseError, RenderError, ResourceError};
use thiserror::Error;

/// Everything that can stop a template from becoming a document.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Pipeline configuration error: {0}")]
    Config(String),

    #[error("Template compilation failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),
}
