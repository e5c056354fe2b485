//! Core library for paginating plain-text articles into fixed-height PNG pages.
//!
//! The pipeline runs in one direction: normalize → split paragraphs → wrap →
//! paginate → render. Pages are numbered only after pagination has finished,
//! since every marker carries the total page count.

pub mod layout;
mod document;
mod error;
mod manifest;
mod output;
mod raster;

pub use crate::layout::{
    AsciiPunctuation, DEFAULT_WRAP_WIDTH, FontSpec, LayoutMetrics, Page, Paragraph, RenderConfig,
    Transliteration, WrappedLine, normalize, normalize_with, paginate, split_pages,
    split_paragraphs, wrap_paragraph, wrap_paragraphs, wrap_text,
};
pub use document::PagedDocument;
pub use error::{ConfigError, FontError};
pub use manifest::{MANIFEST_FILE, Manifest, ManifestPage};
pub use output::{RenderSummary, encode_png, page_file_name, prepare_output_dir, render_to_dir};
pub use raster::{BitmapFont, Canvas, FontKind, PageFont, PageFonts, render_page};

use anyhow::Result;

/// Lay out `text` and write its pages into `output_dir`.
///
/// The configuration is validated before the directory is touched.
pub fn render_text_to_dir(
    text: &str,
    config: &RenderConfig,
    output_dir: &std::path::Path,
    write_manifest: bool,
) -> Result<RenderSummary> {
    config.validate()?;
    let fonts = PageFonts::load(config);
    let doc = PagedDocument::lay_out(text, config, &fonts);
    render_to_dir(&doc, &fonts, output_dir, write_manifest)
}
