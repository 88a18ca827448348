//! JSON export writer.
//!
//! Serializes the placed document — pages, line positions, and the layout
//! constants that produced them — so a downstream renderer can reproduce
//! the exact visual contract.

use std::path::Path;

use anyhow::{Context, Result};

use intervue_core::report::SessionReport;

use crate::layout::{paginate, PagedDocument, PageLayout};
use crate::render::render_lines;

/// Build the paginated document artifact for a report.
pub fn generate_document(report: &SessionReport, layout: &PageLayout) -> PagedDocument {
    paginate(&render_lines(report), layout)
}

/// Write the paginated document as pretty JSON.
pub fn write_json_report(report: &SessionReport, layout: &PageLayout, path: &Path) -> Result<()> {
    let document = generate_document(report, layout);
    let json =
        serde_json::to_string_pretty(&document).context("failed to serialize paged document")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use intervue_core::report::ReportBlock;
    use uuid::Uuid;

    fn make_report() -> SessionReport {
        SessionReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            role: None,
            skills: vec![],
            overall_score: 0.0,
            blocks: vec![ReportBlock {
                number: 1,
                question: "Only question".into(),
                answer: None,
                feedback: None,
            }],
        }
    }

    #[test]
    fn document_carries_layout_and_positions() {
        let document = generate_document(&make_report(), &PageLayout::default());

        assert_eq!(document.page_count(), 1);
        assert_eq!(document.line_count(), 4);
        assert_eq!(document.layout.page_bottom, 270.0);
        assert_eq!(document.pages[0].lines[0].y, 10.0);
    }

    #[test]
    fn json_roundtrips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        write_json_report(&make_report(), &PageLayout::default(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let document: PagedDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document.line_count(), 4);
        assert!(content.contains("Answer: N/A"));
    }
}
