use image::RgbImage;
use log::info;

use crate::layout::config::RenderConfig;
use crate::layout::paginate::{LayoutMetrics, Page, paginate};
use crate::layout::wrap_text;
use crate::raster::{Canvas, PageFonts, render_page};

/// A fully paginated document: every page knows its index and the total, so
/// rendering can start.
#[derive(Debug, Clone)]
pub struct PagedDocument {
    pub pages: Vec<Page>,
    pub metrics: LayoutMetrics,
    pub canvas: Canvas,
}

impl PagedDocument {
    /// Normalize, wrap and paginate `text` using the body font's line height.
    pub fn lay_out(text: &str, config: &RenderConfig, fonts: &PageFonts) -> Self {
        let lines = wrap_text(text, config.wrap_width);
        let metrics = fonts.metrics(config);
        let pages = paginate(lines, &metrics, config.content_height());
        let canvas = Canvas::for_pages(config, &pages, fonts);
        info!(
            "laid out {} page(s) on a {}x{} canvas",
            pages.len(),
            canvas.width,
            canvas.height
        );
        Self {
            pages,
            metrics,
            canvas,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn render_page(&self, page: &Page, fonts: &PageFonts) -> RgbImage {
        render_page(page, &self.canvas, fonts, &self.metrics)
    }

    /// Render every page in order.
    pub fn render_all(&self, fonts: &PageFonts) -> Vec<RgbImage> {
        self.pages
            .iter()
            .map(|page| self.render_page(page, fonts))
            .collect()
    }
}
