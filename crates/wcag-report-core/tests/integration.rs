use std::io::Write;

use tempfile::NamedTempFile;
use wcag_report_core::render_path;
use wcag_report_core::report::assemble::{render, write_report};
use wcag_report_core::report::group::group_violations;
use wcag_report_core::report::model::{AuditFindings, ReportContext, ReportRow, Violation};
use wcag_report_core::writer::{MarkdownWriter, PlainTextWriter, ReportFormat, ReportWriter};

fn context() -> ReportContext {
    ReportContext {
        company: "cognifide".into(),
        project: "demo-site".into(),
        correlation_id: "cognifide-demo-site-main-1".into(),
    }
}

fn row() -> ReportRow {
    ReportRow {
        path: "/content/home".into(),
        url: "https://example.com/home".into(),
        line_number: 1,
        snippet: "<html>".into(),
        solutions: "H57".into(),
    }
}

fn violation(code: &str, path: &str) -> Violation {
    Violation {
        code: code.into(),
        message: format!("{code} message"),
        techniques: format!("{code} techniques"),
        row: ReportRow {
            path: path.into(),
            ..row()
        },
    }
}

fn text(writer: &dyn ReportWriter) -> String {
    String::from_utf8(writer.to_bytes()).expect("report is utf-8")
}

#[test]
fn header_lines_come_first_and_verbatim() {
    let mut w = PlainTextWriter::new(context());
    w.write_header().unwrap();

    let out = text(&w);
    let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(
        lines[..3],
        [
            "Company: cognifide",
            "Project: demo-site",
            "Suite: cognifide-demo-site-main-1"
        ]
    );
}

#[test]
fn end_to_end_single_section() {
    let mut w = PlainTextWriter::new(context());
    w.write_header().unwrap();
    w.write_code_header("WCAG-1.1.1").unwrap();
    w.write_row(&row()).unwrap();
    w.write_solutions("Add a lang attribute").unwrap();

    let expected = format!(
        "Company: cognifide\n\
         Project: demo-site\n\
         Suite: cognifide-demo-site-main-1\n\
         {}\n\
         WCAG-1.1.1\
         Path: [/content/home|https://example.com/home]\n\
         Line number: 1\n\
         {{code:html}}\n\
         <html>\n\
         {{code}}\n\
         Suggested fix technique: H57\n\
         \n\
         More details at: https://www.w3.org/TR/WCAG20/#meaning-doc-lang-id\n\
         Suggested fix technique: (list of techniques - https://www.w3.org/TR/WCAG20-TECHS/)\n\
         Add a lang attribute\n\n\n",
        "*".repeat(72)
    );

    assert_eq!(text(&w), expected);
}

#[test]
fn output_is_concatenation_of_calls_in_order() {
    let calls: Vec<Box<dyn Fn(&mut dyn ReportWriter)>> = vec![
        Box::new(|w: &mut dyn ReportWriter| w.write_issue_separator().unwrap()),
        Box::new(|w: &mut dyn ReportWriter| w.write_message("m").unwrap()),
        Box::new(|w: &mut dyn ReportWriter| w.write_code_header("C").unwrap()),
        Box::new(|w: &mut dyn ReportWriter| w.write_row(&row()).unwrap()),
        Box::new(|w: &mut dyn ReportWriter| w.write_header().unwrap()),
        Box::new(|w: &mut dyn ReportWriter| w.write_solutions("s").unwrap()),
    ];

    for format in [ReportFormat::Plain, ReportFormat::Markdown] {
        let mut combined = format.writer(context());
        let mut expected = Vec::new();

        for call in &calls {
            call(combined.as_mut());

            let mut single = format.writer(context());
            call(single.as_mut());
            expected.extend(single.to_bytes());
        }

        assert_eq!(combined.to_bytes(), expected, "format {format}");
        assert_eq!(combined.to_bytes(), combined.to_bytes());
    }
}

#[test]
fn snapshot_is_independent_of_later_writes() {
    let mut w = MarkdownWriter::new(context());
    w.write_header().unwrap();
    let snapshot = w.to_bytes();

    w.write_message("more").unwrap();

    assert!(w.to_bytes().starts_with(&snapshot));
    assert_ne!(w.to_bytes(), snapshot);
}

#[test]
fn grouped_render_matches_manual_sequence() {
    let findings = AuditFindings {
        context: context(),
        violations: vec![
            violation("A", "/1"),
            violation("B", "/2"),
            violation("A", "/3"),
        ],
    };

    let doc = render(&findings, ReportFormat::Plain).unwrap();

    let mut manual = PlainTextWriter::new(context());
    write_report(&mut manual, &group_violations(&findings.violations)).unwrap();
    assert_eq!(doc.bytes, manual.into_bytes());

    let out = doc.as_str();
    let a = out.find("\nA- *A message*").expect("section A");
    let b = out.find("\nB- *B message*").expect("section B");
    assert!(a < b);
    assert_eq!(out.matches("Path: [/3|").count(), 1);
    assert!(out.find("Path: [/3|").unwrap() < b);
}

#[test]
fn render_is_deterministic() {
    let findings = AuditFindings {
        context: context(),
        violations: vec![violation("A", "/1"), violation("B", "/2")],
    };

    let first = render(&findings, ReportFormat::Markdown).unwrap();
    let second = render(&findings, ReportFormat::Markdown).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.sha256.len(), 64);
}

#[test]
fn render_path_applies_suite_override() {
    let findings = AuditFindings {
        context: context(),
        violations: vec![violation("A", "/1")],
    };
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&findings).unwrap().as_bytes())
        .unwrap();
    file.flush().unwrap();

    let doc = render_path(file.path(), ReportFormat::Plain, Some("nightly".into())).unwrap();
    assert!(doc.as_str().starts_with("Company: cognifide\nProject: demo-site\nSuite: nightly\n"));

    let doc = render_path(file.path(), ReportFormat::Plain, None).unwrap();
    assert!(doc.as_str().contains("Suite: cognifide-demo-site-main-1\n"));
}
