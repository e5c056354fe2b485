use image::{Rgb, RgbImage};

use crate::layout::config::{MAX_CANVAS_DIMENSION, RenderConfig};
use crate::layout::paginate::{LayoutMetrics, Page};
use crate::layout::wrap::WrappedLine;
use crate::raster::font::PageFont;

/// Body and marker fonts for a run.
pub struct PageFonts {
    pub body: PageFont,
    pub marker: PageFont,
}

impl PageFonts {
    pub fn load(config: &RenderConfig) -> Self {
        Self {
            body: PageFont::load(&config.body_font),
            marker: PageFont::load(&config.marker_font),
        }
    }

    /// Built-in bitmap fonts at the configured sizes, ignoring font paths.
    pub fn bitmap(config: &RenderConfig) -> Self {
        Self {
            body: PageFont::bitmap(config.body_font.size),
            marker: PageFont::bitmap(config.marker_font.size),
        }
    }

    pub fn metrics(&self, config: &RenderConfig) -> LayoutMetrics {
        LayoutMetrics::new(self.body.line_height(), config)
    }
}

/// Image geometry and colors shared by every page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub background: Rgb<u8>,
    pub ink: Rgb<u8>,
}

impl Canvas {
    /// Size the canvas for `pages`.
    ///
    /// Without a configured width the canvas fits `wrap_width` of the body
    /// font's widest character, or the widest page marker if that is wider.
    /// A word longer than the wrap width is clipped at the right edge.
    pub fn for_pages(config: &RenderConfig, pages: &[Page], fonts: &PageFonts) -> Self {
        let width = config.canvas_width.unwrap_or_else(|| {
            let columns = u32::try_from(config.wrap_width).unwrap_or(u32::MAX);
            let content = columns.saturating_mul(fonts.body.max_char_width());
            let widest_marker = pages
                .iter()
                .map(|page| fonts.marker.text_width(&page.marker()))
                .max()
                .unwrap_or(0);
            content
                .max(widest_marker)
                .max(1)
                .saturating_add(config.padding.saturating_mul(2))
                .min(MAX_CANVAS_DIMENSION)
        });
        Self {
            width,
            height: config.max_image_height,
            padding: config.padding,
            background: Rgb(config.background),
            ink: Rgb(config.ink),
        }
    }
}

/// Draw one page: background, lines from the top padding down, marker in the
/// bottom-right corner.
///
/// The cursor moves by [`LayoutMetrics::advance`], the same rule the paginator
/// used, so a page never runs past its content height.
pub fn render_page(
    page: &Page,
    canvas: &Canvas,
    fonts: &PageFonts,
    metrics: &LayoutMetrics,
) -> RgbImage {
    let mut image = RgbImage::from_pixel(canvas.width, canvas.height, canvas.background);
    let padding = canvas.padding as i32;

    let mut y = padding;
    for line in &page.lines {
        if let WrappedLine::Text(text) = line {
            fonts.body.draw(&mut image, padding, y, text, canvas.ink);
        }
        y += metrics.advance(line) as i32;
    }

    let marker = page.marker();
    let marker_x = canvas.width as i32 - padding - fonts.marker.text_width(&marker) as i32;
    let marker_y = canvas.height as i32 - padding - fonts.marker.line_height() as i32;
    fonts
        .marker
        .draw(&mut image, marker_x, marker_y, &marker, canvas.ink);

    image
}
