//! Human-readable rendering of analysis results

use shared_types::AnalysisResult;

/// Render a result the way the command line prints it
///
/// An error renders as a single line. A report lists STEM matches, then
/// education matches labelled by level, with a notice for an empty category.
pub fn render_text(result: &AnalysisResult) -> String {
    let report = match result {
        AnalysisResult::Error { error } => return format!("Error: {}\n", error),
        AnalysisResult::Report(report) => report,
    };

    let mut output = String::new();
    output.push_str(&format!("\nAnalyzed {} pages\n\n", report.page_count));

    output.push_str("STEM Major Requirements Found:\n");
    if report.stem_requirements.is_empty() {
        output.push_str("- No STEM requirements found\n");
    }
    for item in &report.stem_requirements {
        output.push_str(&format!("\nPage {}:\n", item.page_number));
        output.push_str(&format!("- Found: '{}'\n", item.matched_text));
        output.push_str(&format!("- Context: '...{}...'\n", item.context));
    }

    output.push_str("\nEducation Level Requirements Found:\n");
    if report.education_requirements.is_empty() {
        output.push_str("- No education level requirements found\n");
    }
    for item in &report.education_requirements {
        output.push_str(&format!(
            "\nPage {} ({}):\n",
            item.record.page_number,
            item.level().label()
        ));
        output.push_str(&format!("- Found: '{}'\n", item.record.matched_text));
        output.push_str(&format!("- Context: '...{}...'\n", item.record.context));
    }

    output
}
