use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),

    #[error("Password-protected PDF")]
    Encrypted,

    #[error("Failed to extract text from page {page}: {message}")]
    PageText { page: u32, message: String },

    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractionError::NotFound(_))
    }
}
