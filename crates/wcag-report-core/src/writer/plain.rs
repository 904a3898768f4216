use std::io::Write;

use crate::error::Result;
use crate::report::model::{ReportContext, ReportRow};
use crate::writer::{ReportWriter, WCAG_DETAILS_URL, WCAG_TECHNIQUES_URL};

/// Width of the `*` rule opening every code section.
pub const RULE_WIDTH: usize = 72;

/// Writer producing JIRA / Confluence wiki markup.
#[derive(Debug)]
pub struct PlainTextWriter {
    context: ReportContext,
    buf: Vec<u8>,
}

impl PlainTextWriter {
    pub fn new(context: ReportContext) -> Self {
        Self {
            context,
            buf: Vec::new(),
        }
    }

    /// Consume the writer and hand over its buffer without copying.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl ReportWriter for PlainTextWriter {
    fn write_header(&mut self) -> Result<()> {
        write!(
            self.buf,
            "Company: {}\nProject: {}\nSuite: {}\n",
            self.context.company, self.context.project, self.context.correlation_id
        )?;
        Ok(())
    }

    fn write_code_header(&mut self, code: &str) -> Result<()> {
        write!(self.buf, "{}\n{code}", "*".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn write_message(&mut self, message: &str) -> Result<()> {
        write!(self.buf, "- *{message}*\n\n")?;
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        write!(
            self.buf,
            "Path: [{}|{}]\nLine number: {}\n{{code:html}}\n{}\n{{code}}\nSuggested fix technique: {}\n\n",
            row.path, row.url, row.line_number, row.snippet, row.solutions
        )?;
        Ok(())
    }

    fn write_solutions(&mut self, solutions: &str) -> Result<()> {
        write!(
            self.buf,
            "More details at: {WCAG_DETAILS_URL}\n\
             Suggested fix technique: (list of techniques - {WCAG_TECHNIQUES_URL})\n\
             {solutions}\n\n\n"
        )?;
        Ok(())
    }

    fn write_issue_separator(&mut self) -> Result<()> {
        self.buf.write_all(b"\n")?;
        Ok(())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }
}
