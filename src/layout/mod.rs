//! Text pipeline: normalization, paragraph splitting, wrapping and pagination.

pub mod config;
pub mod normalize;
pub mod paginate;
pub mod paragraphs;
pub mod wrap;

pub use config::{FontSpec, RenderConfig};
pub use normalize::{AsciiPunctuation, Transliteration, normalize, normalize_with};
pub use paginate::{LayoutMetrics, Page, paginate, split_pages};
pub use paragraphs::{Paragraph, split_paragraphs};
pub use wrap::{DEFAULT_WRAP_WIDTH, WrappedLine, wrap_paragraph, wrap_paragraphs};

/// Normalize, split and wrap `text` into the flat line stream.
pub fn wrap_text(text: &str, wrap_width: usize) -> Vec<WrappedLine> {
    let normalized = normalize(text);
    let paragraphs = split_paragraphs(&normalized);
    wrap_paragraphs(&paragraphs, wrap_width)
}
