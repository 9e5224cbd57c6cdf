pub mod types;

pub use types::{
    AnalysisResult, EducationLevel, EducationMatchRecord, MatchRecord, RequirementCategory,
    RequirementReport,
};
