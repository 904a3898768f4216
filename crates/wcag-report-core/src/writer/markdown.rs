use std::io::Write;

use crate::error::Result;
use crate::report::model::{ReportContext, ReportRow};
use crate::writer::{ReportWriter, WCAG_DETAILS_URL, WCAG_TECHNIQUES_URL};

/// Writer producing GitHub-flavoured Markdown.
#[derive(Debug)]
pub struct MarkdownWriter {
    context: ReportContext,
    buf: Vec<u8>,
}

impl MarkdownWriter {
    pub fn new(context: ReportContext) -> Self {
        Self {
            context,
            buf: Vec::new(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl ReportWriter for MarkdownWriter {
    fn write_header(&mut self) -> Result<()> {
        write!(
            self.buf,
            "- Company: {}\n- Project: {}\n- Suite: {}\n",
            self.context.company, self.context.project, self.context.correlation_id
        )?;
        Ok(())
    }

    fn write_code_header(&mut self, code: &str) -> Result<()> {
        write!(self.buf, "\n---\n\n## {code}\n\n")?;
        Ok(())
    }

    fn write_message(&mut self, message: &str) -> Result<()> {
        write!(self.buf, "*{message}*\n\n")?;
        Ok(())
    }

    fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        write!(
            self.buf,
            "Path: [{}]({})\nLine number: {}\n```html\n{}\n```\nSuggested fix technique: {}\n\n",
            row.path, row.url, row.line_number, row.snippet, row.solutions
        )?;
        Ok(())
    }

    fn write_solutions(&mut self, solutions: &str) -> Result<()> {
        write!(
            self.buf,
            "More details at: <{WCAG_DETAILS_URL}>\n\
             Suggested fix technique: ([list of techniques]({WCAG_TECHNIQUES_URL}))\n\
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
