//! Fixed-geometry page layout.
//!
//! A running vertical position starts at the top margin, advances by the
//! line height for each emitted line, and whenever it exceeds the
//! page-bottom threshold a page break is inserted and the position resets.
//! With the default constants a page holds exactly 33 lines.

use serde::{Deserialize, Serialize};

use crate::render::LineContent;

/// Layout constants applied to every page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageLayout {
    /// Vertical position of the first line on each page.
    pub top_margin: f64,
    /// Vertical advance per emitted line.
    pub line_height: f64,
    /// Break to a new page once the running position exceeds this.
    pub page_bottom: f64,
    /// Horizontal position of normal lines.
    pub left_margin: f64,
    /// Horizontal position of indented (tip) lines.
    pub tip_indent: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            top_margin: 10.0,
            line_height: 8.0,
            page_bottom: 270.0,
            left_margin: 10.0,
            tip_indent: 15.0,
        }
    }
}

/// A line placed at a fixed position on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// One page of placed lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// The paginated document artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedDocument {
    pub layout: PageLayout,
    pub pages: Vec<Page>,
}

impl PagedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Place rendered lines onto pages.
///
/// Given the same lines and the same layout constants this reproduces the
/// exact same page-break placement. An empty line sequence produces a
/// single empty page.
pub fn paginate(lines: &[LineContent], layout: &PageLayout) -> PagedDocument {
    let mut pages = vec![Page::default()];
    let mut y = layout.top_margin;

    for line in lines {
        let x = if line.indented {
            layout.tip_indent
        } else {
            layout.left_margin
        };
        pages
            .last_mut()
            .expect("pages is never empty")
            .lines
            .push(PlacedLine {
                x,
                y,
                text: line.text.clone(),
            });

        y += layout.line_height;
        if y > layout.page_bottom {
            pages.push(Page::default());
            y = layout.top_margin;
        }
    }

    // Drop a trailing page that a break opened but nothing landed on.
    if pages.len() > 1 && pages.last().is_some_and(|p| p.lines.is_empty()) {
        pages.pop();
    }

    PagedDocument {
        layout: *layout,
        pages,
    }
}
