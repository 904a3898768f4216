pub mod error;
pub mod input;
pub mod report;
pub mod writer;

use std::path::Path;

use anyhow::Result;

use crate::report::assemble::{ReportDocument, render};
use crate::writer::ReportFormat;

pub use error::ReportError;

pub const TOOL_NAME: &str = "wcag-report";

/// Load a findings document from `path` and render it in `format`.
///
/// `suite` replaces the correlation id carried by the document when set.
pub fn render_path(
    path: &Path,
    format: ReportFormat,
    suite: Option<String>,
) -> Result<ReportDocument> {
    let mut findings = input::read_findings(path)?;
    if let Some(suite) = suite {
        findings.context.correlation_id = suite;
    }

    let document = render(&findings, format)?;
    Ok(document)
}
