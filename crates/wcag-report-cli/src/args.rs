use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wcag_report_core::writer::ReportFormat;

#[derive(Debug, Parser)]
#[command(
    name = "wcag-report",
    version,
    about = "Render accessibility audit findings as an issue-tracker report"
)]
pub struct Args {
    /// Path to the findings JSON document
    pub findings_path: PathBuf,

    /// Output format
    #[arg(long, env = "WCAG_REPORT_FORMAT", default_value = "plain")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Override the suite / correlation id from the findings document
    #[arg(long)]
    pub suite: Option<String>,

    /// Print the SHA-256 of the rendered report to stderr
    #[arg(long)]
    pub digest: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Markdown,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => ReportFormat::Plain,
            OutputFormat::Markdown => ReportFormat::Markdown,
        }
    }
}
