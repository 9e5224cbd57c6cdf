use std::collections::BTreeSet;
use std::fmt;

/// Pattern group a match was found by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementCategory {
    Stem,
    Education,
}

impl RequirementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::Stem => "stem",
            RequirementCategory::Education => "education",
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchRecord {
    pub matched_text: String,
    pub page_number: u32,    // 1-based
    pub start_offset: usize, // Character offset in the page text
    pub end_offset: usize,   // Exclusive end character offset
    pub context: String,     // Up to 50 characters either side of the match
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EducationMatchRecord {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub is_college_requirement: bool,
}

impl EducationMatchRecord {
    pub fn level(&self) -> EducationLevel {
        if self.is_college_requirement {
            EducationLevel::College
        } else {
            EducationLevel::HighSchool
        }
    }
}

/// Education level an education match points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    College,
    HighSchool,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::College => "College/University",
            EducationLevel::HighSchool => "High School",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every requirement match found in one document
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequirementReport {
    pub stem_requirements: Vec<MatchRecord>,
    pub education_requirements: Vec<EducationMatchRecord>,
    pub page_count: usize,
}

impl RequirementReport {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stem_requirements.is_empty() && self.education_requirements.is_empty()
    }

    pub fn college_count(&self) -> usize {
        self.education_requirements
            .iter()
            .filter(|r| r.is_college_requirement)
            .count()
    }

    pub fn high_school_count(&self) -> usize {
        self.education_requirements.len() - self.college_count()
    }

    /// Sorted, de-duplicated page numbers that produced at least one match
    pub fn pages_with_matches(&self) -> Vec<u32> {
        let pages: BTreeSet<u32> = self
            .stem_requirements
            .iter()
            .map(|r| r.page_number)
            .chain(
                self.education_requirements
                    .iter()
                    .map(|r| r.record.page_number),
            )
            .collect();
        pages.into_iter().collect()
    }
}

/// Outcome of analyzing one document: either a full report or an error message
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Report(RequirementReport),
    Error { error: String },
}

impl AnalysisResult {
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResult::Error { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResult::Error { error } => Some(error),
            AnalysisResult::Report(_) => None,
        }
    }

    pub fn report(&self) -> Option<&RequirementReport> {
        match self {
            AnalysisResult::Report(report) => Some(report),
            AnalysisResult::Error { .. } => None,
        }
    }
}

impl From<RequirementReport> for AnalysisResult {
    fn from(report: RequirementReport) -> Self {
        AnalysisResult::Report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(text: &str, page: u32) -> MatchRecord {
        MatchRecord {
            matched_text: text.to_string(),
            page_number: page,
            start_offset: 0,
            end_offset: text.chars().count(),
            context: text.to_string(),
        }
    }

    #[test]
    fn test_error_serializes_as_single_field() {
        let result = AnalysisResult::Error {
            error: "PDF file not found".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "PDF file not found" }));
    }

    #[test]
    fn test_report_serializes_flat_education_record() {
        let mut report = RequirementReport::new(1);
        report.education_requirements.push(EducationMatchRecord {
            record: record("high school graduate", 1),
            is_college_requirement: false,
        });
        let json = serde_json::to_value(AnalysisResult::from(report)).unwrap();

        assert_eq!(json["page_count"], 1);
        assert_eq!(json["stem_requirements"], serde_json::json!([]));
        let edu = &json["education_requirements"][0];
        assert_eq!(edu["matched_text"], "high school graduate");
        assert_eq!(edu["is_college_requirement"], false);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_untagged_round_trip_keeps_variant() {
        let error: AnalysisResult =
            serde_json::from_str(r#"{"error":"Error processing PDF: bad xref"}"#).unwrap();
        assert_eq!(error.error(), Some("Error processing PDF: bad xref"));

        let report: AnalysisResult = serde_json::from_str(
            r#"{"stem_requirements":[],"education_requirements":[],"page_count":0}"#,
        )
        .unwrap();
        assert_eq!(report.report(), Some(&RequirementReport::new(0)));
    }

    #[test]
    fn test_education_level_labels() {
        let college = EducationMatchRecord {
            record: record("current university student", 1),
            is_college_requirement: true,
        };
        assert_eq!(college.level(), EducationLevel::College);
        assert_eq!(college.level().to_string(), "College/University");
        assert_eq!(EducationLevel::HighSchool.label(), "High School");
    }

    #[test]
    fn test_report_counters() {
        let mut report = RequirementReport::new(4);
        assert!(report.is_empty());

        report.stem_requirements.push(record("STEM majors only", 3));
        report.education_requirements.push(EducationMatchRecord {
            record: record("current college student", 1),
            is_college_requirement: true,
        });
        report.education_requirements.push(EducationMatchRecord {
            record: record("high school student", 3),
            is_college_requirement: false,
        });

        assert!(!report.is_empty());
        assert_eq!(report.college_count(), 1);
        assert_eq!(report.high_school_count(), 1);
        assert_eq!(report.pages_with_matches(), vec![1, 3]);
    }
}
