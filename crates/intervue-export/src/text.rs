//! Plain-text export writer.
//!
//! Renders the paginated document as text, one page section per page,
//! with tip indentation preserved. Page boundaries reflect the layout
//! engine's break placement exactly.

use std::path::Path;

use anyhow::Result;

use intervue_core::report::SessionReport;

use crate::layout::{paginate, PagedDocument, PageLayout};
use crate::render::render_lines;

/// Render a report as paginated plain text.
pub fn generate_text(report: &SessionReport, layout: &PageLayout) -> String {
    let lines = render_lines(report);
    let document = paginate(&lines, layout);
    document_to_text(&document)
}

fn document_to_text(document: &PagedDocument) -> String {
    let mut out = String::new();

    for (i, page) in document.pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("--- Page {} ---\n", i + 1));
        for line in &page.lines {
            if line.x > document.layout.left_margin {
                out.push_str("  ");
            }
            out.push_str(&line.text);
            out.push('\n');
        }
    }

    out
}

/// Write the plain-text export to a file.
pub fn write_text_report(report: &SessionReport, layout: &PageLayout, path: &Path) -> Result<()> {
    let text = generate_text(report, layout);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use intervue_core::model::Feedback;
    use intervue_core::report::ReportBlock;
    use uuid::Uuid;

    fn make_report(question_count: usize) -> SessionReport {
        let blocks = (1..=question_count)
            .map(|number| ReportBlock {
                number,
                question: format!("Question {number}"),
                answer: Some(format!("Answer {number}")),
                feedback: Some(Feedback {
                    sentiment: 0.3,
                    keyword_coverage: 0.5,
                    score: 75.0,
                    tips: vec!["Add concrete examples.".into()],
                }),
            })
            .collect();

        SessionReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            role: None,
            skills: vec!["python".into()],
            overall_score: 75.0,
            blocks,
        }
    }

    #[test]
    fn text_contains_header_and_blocks() {
        let text = generate_text(&make_report(2), &PageLayout::default());

        assert!(text.contains("--- Page 1 ---"));
        assert!(text.contains("Interview Report"));
        assert!(text.contains("Overall Score: 75.00"));
        assert!(text.contains("Q1: Question 1"));
        assert!(text.contains("Q2: Question 2"));
        assert!(text.contains("  - Add concrete examples."));
    }

    #[test]
    fn long_report_spans_pages() {
        // 2 header lines + 6 lines per block: 10 blocks = 62 lines > 33.
        let text = generate_text(&make_report(10), &PageLayout::default());
        assert!(text.contains("--- Page 2 ---"));
        assert!(!text.contains("--- Page 3 ---"));
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_text_report(&make_report(1), &PageLayout::default(), &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Interview Report"));
    }
}
