use serde::{Deserialize, Serialize};

/// Identifies the report instance.
///
/// Only the header is rendered from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportContext {
    pub company: String,
    pub project: String,
    /// Suite / correlation id of the test run that produced the findings.
    pub correlation_id: String,
}

/// One accessibility violation instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportRow {
    pub path: String,
    pub url: String,
    /// 1-based line within the resource.
    pub line_number: u32,
    /// Raw markup. Rendered verbatim, never escaped.
    pub snippet: String,
    /// Suggested fix for this instance. May be empty.
    #[serde(default)]
    pub solutions: String,
}

/// Flat violation record as emitted by the scanning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// Grouping code, e.g. `WCAG2AA.Principle3.Guideline3_1.3_1_1.H57.2`.
    pub code: String,
    pub message: String,
    /// Group-level list of techniques, written once per issue group.
    #[serde(default)]
    pub techniques: String,
    #[serde(flatten)]
    pub row: ReportRow,
}

/// Input document: report identity plus every violation found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditFindings {
    pub context: ReportContext,
    #[serde(default)]
    pub violations: Vec<Violation>,
}

/// Violations sharing one `(code, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueGroup {
    pub code: String,
    pub message: String,
    pub techniques: String,
    pub rows: Vec<ReportRow>,
}
