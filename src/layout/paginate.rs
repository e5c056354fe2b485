use log::debug;
use serde::Serialize;

use crate::layout::config::RenderConfig;
use crate::layout::wrap::WrappedLine;

/// Vertical cursor rules shared by the paginator and the page renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub line_height: u32,
    pub normal_line_spacing: u32,
    pub extra_paragraph_spacing: u32,
}

impl LayoutMetrics {
    pub fn new(line_height: u32, config: &RenderConfig) -> Self {
        Self {
            line_height,
            normal_line_spacing: config.normal_line_spacing,
            extra_paragraph_spacing: config.extra_paragraph_spacing,
        }
    }

    /// Pixels the cursor moves down after `line`.
    pub fn advance(&self, line: &WrappedLine) -> u32 {
        let spacing = if line.is_spacer() {
            self.extra_paragraph_spacing
        } else {
            self.normal_line_spacing
        };
        self.line_height.saturating_add(spacing)
    }

    /// Total height of a run of lines.
    pub fn height_of(&self, lines: &[WrappedLine]) -> u32 {
        lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(self.advance(line)))
    }
}

/// Lines destined for one image, with its place in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based.
    pub index: usize,
    pub total: usize,
    pub lines: Vec<WrappedLine>,
}

impl Page {
    /// Text drawn in the bottom-right corner, e.g. `2/5`.
    pub fn marker(&self) -> String {
        format!("{}/{}", self.index, self.total)
    }
}

/// Greedily split `lines` into groups whose height fits `max_height`.
///
/// A line that would overflow the current group starts the next one. A group
/// never ends up empty: a single line taller than `max_height` gets a page to
/// itself. Paragraphs are not kept together.
pub fn split_pages(
    lines: Vec<WrappedLine>,
    metrics: &LayoutMetrics,
    max_height: u32,
) -> Vec<Vec<WrappedLine>> {
    let mut pages = Vec::new();
    let mut current: Vec<WrappedLine> = Vec::new();
    let mut current_height = 0u32;

    for line in lines {
        let needed = metrics.advance(&line);
        if current_height.saturating_add(needed) > max_height && !current.is_empty() {
            debug!(
                "page break after {} line(s) at {}px",
                current.len(),
                current_height
            );
            pages.push(std::mem::take(&mut current));
            current_height = 0;
        }
        current.push(line);
        current_height = current_height.saturating_add(needed);
    }

    if !current.is_empty() {
        pages.push(current);
    }
    pages
}

/// Split into pages, then number them once the total is known.
pub fn paginate(lines: Vec<WrappedLine>, metrics: &LayoutMetrics, max_height: u32) -> Vec<Page> {
    let groups = split_pages(lines, metrics, max_height);
    let total = groups.len();
    groups
        .into_iter()
        .enumerate()
        .map(|(idx, lines)| Page {
            index: idx + 1,
            total,
            lines,
        })
        .collect()
}
