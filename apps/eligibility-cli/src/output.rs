//! Formatting analysis results for stdout

use eligibility_engine::render_text;
use serde::Serialize;
use shared_types::AnalysisResult;
use std::path::Path;

/// One analyzed document, tagged with the path it came from
#[derive(Debug, Serialize)]
pub struct DocumentOutput {
    pub path: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

impl DocumentOutput {
    pub fn new(path: &Path, result: AnalysisResult) -> Self {
        Self {
            path: path.display().to_string(),
            result,
        }
    }
}

/// Text report; documents after the first are preceded by a path header
pub fn render_documents(documents: &[DocumentOutput]) -> String {
    if let [single] = documents {
        return render_text(&single.result);
    }

    let mut output = String::new();
    for (idx, document) in documents.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        output.push_str(&format!("==> {} <==\n", document.path));
        output.push_str(&render_text(&document.result));
    }
    output
}

/// JSON array with one object per document
pub fn render_json(documents: &[DocumentOutput]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(documents)?;
    json.push('\n');
    Ok(json)
}
