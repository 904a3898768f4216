use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::error;
use crate::report::model::AuditFindings;

/// Parse a findings document from its JSON text.
pub fn parse_findings(json: &str) -> error::Result<AuditFindings> {
    let findings = serde_json::from_str(json)?;
    Ok(findings)
}

/// Read a findings document (JSON) produced by the scanning pipeline.
pub fn read_findings(path: &Path) -> Result<AuditFindings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read findings: {}", path.display()))?;

    let findings = parse_findings(&raw)
        .with_context(|| format!("failed to parse findings: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        violations = findings.violations.len(),
        "loaded findings"
    );

    Ok(findings)
}
