//! Rasterisation of laid-out pages into PNG-ready bitmaps.

mod font;
mod paint;

pub use font::{BitmapFont, FontKind, PageFont};
pub use paint::{Canvas, PageFonts, render_page};
