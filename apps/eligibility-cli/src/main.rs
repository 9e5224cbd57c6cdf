//! eligibility-scan
//!
//! Scans scholarship and opportunity listings (PDF, or form-feed separated
//! text) for STEM-major restrictions and education-level requirements and
//! prints every match with its page and surrounding context.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod output;

use eligibility_engine::EligibilityEngine;
use output::DocumentOutput;

/// Report format written to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for eligibility-scan
#[derive(Parser, Debug)]
#[command(name = "eligibility-scan")]
#[command(
    version,
    about = "Find STEM-major and education-level eligibility restrictions in documents"
)]
struct Args {
    /// Documents to analyze, in order
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the report
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("eligibility-scan v{}", env!("CARGO_PKG_VERSION"));

    let engine = EligibilityEngine::new();
    let documents: Vec<DocumentOutput> = args
        .paths
        .iter()
        .map(|path| DocumentOutput::new(path, engine.analyze(path)))
        .collect();

    let failures = documents.iter().filter(|d| d.result.is_error()).count();
    for document in &documents {
        if let Some(report) = document.result.report() {
            info!(
                path = %document.path,
                college = report.college_count(),
                high_school = report.high_school_count(),
                pages_with_matches = ?report.pages_with_matches(),
                "document summary"
            );
        }
    }

    let rendered = match args.format {
        OutputFormat::Text => output::render_documents(&documents),
        OutputFormat::Json => output::render_json(&documents)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
