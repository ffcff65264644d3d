use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Composition call '{call}' issued out of order: {reason}")]
    OutOfOrder { call: &'static str, reason: String },
    #[error("Other composition error: {0}")]
    Other(String),
}

impl From<&str> for ComposeError {
    fn from(s: &str) -> Self {
        ComposeError::Other(s.to_string())
    }
}
