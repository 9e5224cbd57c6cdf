//! Pattern catalog for eligibility restrictions
//!
//! Two independent groups of case-insensitive regexes. Order inside a group is
//! the order matches are reported in, so it is part of the output contract.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::RequirementCategory;

/// Phrasings that restrict an opportunity to STEM majors/students
pub const STEM_PATTERNS: &[&str] = &[
    r"(?i)STEM majors? only",
    r"(?i)for STEM majors",
    r"(?i)must be majoring in STEM",
    r"(?i)STEM students? only",
    r"(?i)restricted to STEM majors",
    r"(?i)open to STEM majors",
    r"(?i)limited to STEM majors",
    r"(?i)STEM background required",
    r"(?i)STEM-related major",
];

/// Education-level phrasings: college/university indicators first, then
/// high school indicators
pub const EDUCATION_PATTERNS: &[&str] = &[
    // Status word, at most three intervening words, then "university/college student"
    r"(?i)(?:must be|current|enrolled|active)(?:\s+[a-z]+){0,3}\s+(?:university|college)\s+student",
    r"(?i)undergraduate students? only",
    r"(?i)graduate students? only",
    r"(?i)enrolled in (?:a|an) (?:university|college)",
    r"(?i)current (?:university|college) students?",
    r"(?i)pursuing (?:a|an) (?:undergraduate|graduate) degree",
    // High school
    r"(?i)high school (?:student|graduate)",
    r"(?i)secondary school (?:student|graduate)",
    r"(?i)(?:recent )?high school graduate",
];

/// Terms that mark an education match as a high school requirement
pub const HIGH_SCHOOL_TERMS: &[&str] = &["high school", "secondary school"];

lazy_static! {
    static ref STANDARD_CATALOG: PatternCatalog = PatternCatalog {
        stem: PatternGroup::compile(RequirementCategory::Stem, STEM_PATTERNS).unwrap(),
        education: PatternGroup::compile(RequirementCategory::Education, EDUCATION_PATTERNS)
            .unwrap(),
    };
}

/// An ordered, immutable list of compiled patterns for one category
#[derive(Debug, Clone)]
pub struct PatternGroup {
    category: RequirementCategory,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Compile pattern sources in order
    pub fn compile(
        category: RequirementCategory,
        sources: &[&str],
    ) -> Result<Self, regex::Error> {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { category, patterns })
    }

    pub fn category(&self) -> RequirementCategory {
        self.category
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The STEM and education pattern groups scanned on every page
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    stem: PatternGroup,
    education: PatternGroup,
}

impl PatternCatalog {
    /// Build a catalog from already compiled groups
    ///
    /// Returns `None` if either group is filed under the wrong category.
    pub fn new(stem: PatternGroup, education: PatternGroup) -> Option<Self> {
        if stem.category() != RequirementCategory::Stem
            || education.category() != RequirementCategory::Education
        {
            return None;
        }
        Some(Self { stem, education })
    }

    /// The built-in catalog, compiled once per process
    pub fn standard() -> &'static PatternCatalog {
        &STANDARD_CATALOG
    }

    pub fn stem(&self) -> &PatternGroup {
        &self.stem
    }

    pub fn education(&self) -> &PatternGroup {
        &self.education
    }
}

/// Classify an education match by its own text only
///
/// Surrounding text is not consulted: "high school students are
/// not required; university students only" still yields a college match for
/// the "university student" span.
pub fn is_college_requirement(matched_text: &str) -> bool {
    let lower = matched_text.to_lowercase();
    !HIGH_SCHOOL_TERMS.iter().any(|term| lower.contains(term))
}
