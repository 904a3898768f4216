//! Report assembly.
//!
//! Drives a [`ReportWriter`] through the canonical call sequence:
//!
//!   header
//!   for each issue group:
//!     code header, message, every row, solutions, issue separator
//!
//! Writers themselves accept any order; this is the only place that decides
//! what a well-formed document looks like.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::Result;
use crate::report::group::group_violations;
use crate::report::model::{AuditFindings, IssueGroup};
use crate::writer::{ReportFormat, ReportWriter};

/// A finalized report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportDocument {
    pub format: ReportFormat,
    /// UTF-8 encoded document.
    pub bytes: Vec<u8>,
    /// Hex-encoded SHA-256 of `bytes`.
    pub sha256: String,
}

impl ReportDocument {
    pub fn new(format: ReportFormat, bytes: Vec<u8>) -> Self {
        let sha256 = hex::encode(Sha256::digest(&bytes));
        Self {
            format,
            bytes,
            sha256,
        }
    }

    pub fn as_str(&self) -> &str {
        // Writers only ever append formatted `str` data.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// Write the full call sequence for `groups` into `writer`.
pub fn write_report<W: ReportWriter + ?Sized>(
    writer: &mut W,
    groups: &[IssueGroup],
) -> Result<()> {
    writer.write_header()?;

    for group in groups {
        debug!(code = %group.code, rows = group.rows.len(), "writing issue group");

        writer.write_code_header(&group.code)?;
        writer.write_message(&group.message)?;
        for row in &group.rows {
            writer.write_row(row)?;
        }
        writer.write_solutions(&group.techniques)?;
        writer.write_issue_separator()?;
    }

    Ok(())
}

/// Group `findings`, render them in `format` and finalize the document.
pub fn render(findings: &AuditFindings, format: ReportFormat) -> Result<ReportDocument> {
    let groups = group_violations(&findings.violations);
    debug!(
        %format,
        violations = findings.violations.len(),
        groups = groups.len(),
        "rendering report"
    );

    let mut writer = format.writer(findings.context.clone());
    write_report(writer.as_mut(), &groups)?;

    Ok(ReportDocument::new(format, writer.to_bytes()))
}
