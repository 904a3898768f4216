//! Format-specific report writers.
//!
//! Every writer accepts the same call sequence and accumulates the rendered
//! fragments, in call order, into a buffer it owns. Call order is not
//! validated: callers decide what a well-formed document looks like (see
//! `report::assemble::write_report` for the canonical sequence).

pub mod markdown;
pub mod plain;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::model::{ReportContext, ReportRow};

pub use markdown::MarkdownWriter;
pub use plain::PlainTextWriter;

/// Reference to the WCAG 2.0 guidance, printed with each solutions block.
pub const WCAG_DETAILS_URL: &str = "https://www.w3.org/TR/WCAG20/#meaning-doc-lang-id";

/// Index of WCAG 2.0 techniques.
pub const WCAG_TECHNIQUES_URL: &str = "https://www.w3.org/TR/WCAG20-TECHS/";

pub trait ReportWriter {
    /// Company, project and suite lines from the context.
    fn write_header(&mut self) -> Result<()>;

    /// Separator rule followed by the section code.
    fn write_code_header(&mut self, code: &str) -> Result<()>;

    fn write_message(&mut self, message: &str) -> Result<()>;

    /// Path link, line number, verbatim snippet and suggested fix of one violation.
    fn write_row(&mut self, row: &ReportRow) -> Result<()>;

    /// WCAG references followed by the caller's solutions text.
    fn write_solutions(&mut self, solutions: &str) -> Result<()>;

    fn write_issue_separator(&mut self) -> Result<()>;

    /// Snapshot of everything written so far.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Output dialect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Wiki markup accepted by JIRA / Confluence.
    #[default]
    Plain,
    Markdown,
}

impl ReportFormat {
    /// Create an empty writer for this dialect.
    pub fn writer(self, context: ReportContext) -> Box<dyn ReportWriter> {
        match self {
            ReportFormat::Plain => Box::new(PlainTextWriter::new(context)),
            ReportFormat::Markdown => Box::new(MarkdownWriter::new(context)),
        }
    }

    /// Conventional file extension for documents in this dialect.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Plain => "txt",
            ReportFormat::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportFormat::Plain => "plain",
            ReportFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}
