//! Shared document loading utilities
//!
//! This crate turns a document on disk into a sequence of per-page plain-text
//! strings. PDFs are read with lopdf one page at a time; plain-text files are
//! split into pages on form feed characters.

pub mod error;
pub mod parser;
pub mod source;

pub use error::ExtractionError;
pub use parser::PdfDocument;
pub use source::{PageSource, TextPages};

use std::path::Path;

/// Open a document, picking the loader from the file extension
///
/// `.txt` files are loaded as form-feed separated text, everything else is
/// parsed as a PDF.
pub fn open_document(path: impl AsRef<Path>) -> Result<Box<dyn PageSource>, ExtractionError> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

    if is_text {
        Ok(Box::new(TextPages::open(path)?))
    } else {
        Ok(Box::new(PdfDocument::open(path)?))
    }
}

/// Read a whole file, separating a missing file from every other I/O failure
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractionError::NotFound(path.display().to_string())
        } else {
            ExtractionError::Io(e)
        }
    })
}
