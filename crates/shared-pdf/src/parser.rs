//! PDF loading with per-page text extraction

use crate::error::ExtractionError;
use crate::source::PageSource;
use lopdf::Document;
use std::path::Path;

/// A parsed PDF whose pages are extracted lazily, one at a time
pub struct PdfDocument {
    doc: Document,
    /// 1-based lopdf page numbers in document order
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Read and parse a PDF from disk
    ///
    /// # Errors
    /// - `ExtractionError::NotFound` - nothing exists at `path`
    /// - `ExtractionError::Io` - the file exists but could not be read
    /// - `ExtractionError::ParseError` / `Encrypted` - see [`PdfDocument::from_bytes`]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let bytes = crate::read_file(path)?;
        let document = Self::from_bytes(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            pages = document.page_count(),
            "loaded PDF document"
        );
        Ok(document)
    }

    /// Parse PDF bytes already in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let doc = Document::load_mem(bytes).map_err(|e| {
            let message = e.to_string();
            let lower = message.to_lowercase();
            if lower.contains("encrypt") || lower.contains("password") {
                ExtractionError::Encrypted
            } else {
                ExtractionError::ParseError(message)
            }
        })?;

        if doc.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }

        let page_numbers = doc.get_pages().keys().copied().collect();
        Ok(Self { doc, page_numbers })
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractionError> {
        let page = *self
            .page_numbers
            .get(index)
            .ok_or(ExtractionError::PageOutOfRange {
                index,
                page_count: self.page_numbers.len(),
            })?;

        self.doc
            .extract_text(&[page])
            .map_err(|e| ExtractionError::PageText {
                page,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{content::Content, content::Operation, Dictionary, Object, Stream};
    use std::io::Write;

    // Helper to create a PDF with one Helvetica text line per page
    fn create_text_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(b"Helvetica".to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ]));
        let resources_id = doc.add_object(Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![("F1", Object::Reference(font_id))])),
        )]));

        let mut page_ids = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new(
                        "Tf",
                        vec![Object::Name(b"F1".to_vec()), Object::Integer(12)],
                    ),
                    Operation::new("Td", vec![Object::Integer(72), Object::Integer(700)]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            text.as_bytes().to_vec(),
                            lopdf::StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));

            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ]),
                ),
                ("Resources", Object::Reference(resources_id)),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(page_ids.len() as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_page_count_matches_document() {
        let pdf = create_text_pdf(&["one", "two", "three"]);
        let document = PdfDocument::from_bytes(&pdf).unwrap();
        assert_eq!(document.page_count(), 3);
    }

    #[test]
    fn test_extracts_text_per_page() {
        let pdf = create_text_pdf(&["Open to STEM majors", "Recent high school graduate"]);
        let document = PdfDocument::from_bytes(&pdf).unwrap();

        let first = document.page_text(0).unwrap();
        let second = document.page_text(1).unwrap();
        assert!(first.contains("Open to STEM majors"));
        assert!(!first.contains("high school"));
        assert!(second.contains("Recent high school graduate"));
    }

    #[test]
    fn test_zero_page_document() {
        let pdf = create_text_pdf(&[]);
        let document = PdfDocument::from_bytes(&pdf).unwrap();
        assert_eq!(document.page_count(), 0);
        assert!(matches!(
            document.page_text(0),
            Err(ExtractionError::PageOutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_bytes_fail_to_parse() {
        let result = PdfDocument::from_bytes(b"Not a PDF file");
        assert!(matches!(result, Err(ExtractionError::ParseError(_))));
    }

    #[test]
    fn test_empty_bytes_fail_to_parse() {
        assert!(PdfDocument::from_bytes(b"").is_err());
    }

    #[test]
    fn test_open_reads_from_disk() {
        let pdf = create_text_pdf(&["STEM background required"]);
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&pdf).unwrap();

        let document = PdfDocument::open(file.path()).unwrap();
        assert_eq!(document.page_count(), 1);
        assert!(document
            .page_text(0)
            .unwrap()
            .contains("STEM background required"));
    }

    #[test]
    fn test_open_missing_file_is_not_found() {
        let err = PdfDocument::open("/tmp/missing-listing-0f3a.pdf").err().unwrap();
        assert!(err.is_not_found());
    }
}
