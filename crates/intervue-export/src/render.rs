//! Report-to-line rendering.
//!
//! Produces the ordered line content of the export: a title, the overall
//! score, then one block per question. A question that was never answered
//! renders the `N/A` placeholder; an explicitly empty answer renders
//! empty. Feedback lines appear only when feedback exists.

use intervue_core::report::{ReportBlock, SessionReport};

/// Placeholder for questions that were never answered.
pub const NO_ANSWER: &str = "N/A";

/// One logical line of export content, before placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContent {
    pub text: String,
    /// Indented lines (tips) render at the tip indent.
    pub indented: bool,
}

impl LineContent {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indented: false,
        }
    }

    fn indented(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indented: true,
        }
    }
}

/// Render the full report as ordered line content.
pub fn render_lines(report: &SessionReport) -> Vec<LineContent> {
    let mut lines = vec![
        LineContent::plain("Interview Report"),
        LineContent::plain(format!("Overall Score: {:.2}", report.overall_score)),
    ];

    for block in &report.blocks {
        lines.extend(render_block(block));
    }

    lines
}

fn render_block(block: &ReportBlock) -> Vec<LineContent> {
    let mut lines = vec![
        LineContent::plain(format!("Q{}: {}", block.number, block.question)),
        LineContent::plain(format!(
            "Answer: {}",
            block.answer.as_deref().unwrap_or(NO_ANSWER)
        )),
    ];

    if let Some(feedback) = &block.feedback {
        lines.push(LineContent::plain(format!(
            "Sentiment: {} ({:.2})",
            feedback.sentiment_label(),
            feedback.sentiment
        )));
        lines.push(LineContent::plain(format!(
            "Keyword Coverage: {:.2}",
            feedback.keyword_coverage
        )));
        lines.push(LineContent::plain(format!("Score: {:.2}", feedback.score)));
        for tip in &feedback.tips {
            lines.push(LineContent::indented(format!("- {tip}")));
        }
    }

    lines
}
