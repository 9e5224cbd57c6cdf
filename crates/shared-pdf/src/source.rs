//! Page-oriented view of a document

use crate::error::ExtractionError;
use std::path::Path;

const FORM_FEED: char = '\x0C';

/// Anything that can hand out plain text one page at a time
///
/// Page indices are 0-based; `page_text` may return an empty string.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn page_text(&self, index: usize) -> Result<String, ExtractionError>;
}

impl<T: PageSource + ?Sized> PageSource for Box<T> {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractionError> {
        (**self).page_text(index)
    }
}

/// Pages already held as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPages {
    pages: Vec<String>,
}

impl TextPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Split text on form feed characters, one page per segment
    ///
    /// Empty input has no pages. A single trailing form feed terminates the
    /// last page rather than opening an empty one.
    pub fn from_form_feed(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let body = text.strip_suffix(FORM_FEED).unwrap_or(text);
        Self {
            pages: body.split(FORM_FEED).map(str::to_string).collect(),
        }
    }

    /// Load a UTF-8 text file (lossily decoded) and split it into pages
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let bytes = crate::read_file(path)?;
        let pages = Self::from_form_feed(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %path.display(), pages = pages.page_count(), "loaded text document");
        Ok(pages)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }
}

impl PageSource for TextPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractionError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(ExtractionError::PageOutOfRange {
                index,
                page_count: self.pages.len(),
            })
    }
}
