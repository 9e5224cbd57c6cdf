use shared_pdf::ExtractionError;
use shared_types::AnalysisResult;
use thiserror::Error;

/// Why a document could not be analyzed
///
/// The display strings are the messages callers see in `AnalysisResult::Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("PDF file not found")]
    NotFound,

    #[error("Error processing PDF: {0}")]
    ExtractionFailure(String),
}

impl From<ExtractionError> for AnalysisError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::NotFound(_) => AnalysisError::NotFound,
            other => AnalysisError::ExtractionFailure(other.to_string()),
        }
    }
}

impl From<AnalysisError> for AnalysisResult {
    fn from(err: AnalysisError) -> Self {
        AnalysisResult::Error {
            error: err.to_string(),
        }
    }
}
