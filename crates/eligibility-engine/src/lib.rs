//! Eligibility requirement scanning for scholarship and opportunity listings
//!
//! Reports, page by page, phrasings that restrict an opportunity to STEM
//! majors and phrasings that require a given education level (college or
//! university vs. high school), with a context window around each match.

pub mod error;
pub mod extractors;
pub mod patterns;
pub mod render;
pub mod scanner;

pub use error::AnalysisError;
pub use patterns::{PatternCatalog, PatternGroup};
pub use render::render_text;
pub use scanner::{scan_page, PageMatches};

use shared_pdf::PageSource;
use shared_types::{AnalysisResult, RequirementReport};
use std::path::Path;
use tracing::{debug, info, warn};

/// EligibilityEngine entry point
pub struct EligibilityEngine<'a> {
    catalog: &'a PatternCatalog,
}

impl EligibilityEngine<'static> {
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::standard(),
        }
    }
}

impl Default for EligibilityEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EligibilityEngine<'a> {
    pub fn with_catalog(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a PatternCatalog {
        self.catalog
    }

    /// Analyze the document at `path`
    ///
    /// Never fails: a missing file or any extraction problem comes back as
    /// `AnalysisResult::Error` with no partial matches.
    pub fn analyze(&self, path: impl AsRef<Path>) -> AnalysisResult {
        let path = path.as_ref();
        match self.try_analyze(path) {
            Ok(report) => {
                info!(
                    path = %path.display(),
                    pages = report.page_count,
                    stem = report.stem_requirements.len(),
                    education = report.education_requirements.len(),
                    "analysis complete"
                );
                report.into()
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "analysis failed");
                err.into()
            }
        }
    }

    /// Same as [`EligibilityEngine::analyze`] but with the failure as an `Err`
    pub fn try_analyze(&self, path: impl AsRef<Path>) -> Result<RequirementReport, AnalysisError> {
        let source = shared_pdf::open_document(path)?;
        self.analyze_source(&source)
    }

    /// Scan every page of an already opened document in page order
    pub fn analyze_source<S: PageSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<RequirementReport, AnalysisError> {
        let page_count = source.page_count();
        let mut report = RequirementReport::new(page_count);

        for index in 0..page_count {
            let text = source.page_text(index)?;
            let page_number = (index + 1) as u32;
            let matches = scan_page(self.catalog, page_number, &text);
            debug!(
                page = page_number,
                chars = text.chars().count(),
                stem = matches.stem.len(),
                education = matches.education.len(),
                "scanned page"
            );
            report.stem_requirements.extend(matches.stem);
            report.education_requirements.extend(matches.education);
        }

        Ok(report)
    }

    /// Scan raw text as a single page (for testing)
    pub fn check_text(&self, text: &str) -> RequirementReport {
        let matches = scan_page(self.catalog, 1, text);
        RequirementReport {
            stem_requirements: matches.stem,
            education_requirements: matches.education,
            page_count: 1,
        }
    }
}
