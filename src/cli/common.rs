//! Layout options shared by the `render` and `layout` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use textpages::RenderConfig;

use crate::cli::utils::parse_rgb;

/// Configuration file plus per-field overrides. Flags win over the file, the
/// file wins over built-in defaults.
#[derive(Args, Debug, Default)]
pub struct LayoutOptions {
    /// JSON configuration file (see `textpages config`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Height of every page image in pixels.
    #[arg(long = "height")]
    pub max_image_height: Option<u32>,
    /// Maximum characters per line.
    #[arg(long = "wrap")]
    pub wrap_width: Option<usize>,
    /// Pixels added below each text line.
    #[arg(long = "line-spacing")]
    pub normal_line_spacing: Option<u32>,
    /// Pixels added below each paragraph break.
    #[arg(long = "paragraph-spacing")]
    pub extra_paragraph_spacing: Option<u32>,
    /// Margin on every side in pixels.
    #[arg(long)]
    pub padding: Option<u32>,
    /// Fixed page width in pixels (default: fit the wrap width).
    #[arg(long = "width")]
    pub canvas_width: Option<u32>,
    /// Background color as `R,G,B` or `#rrggbb`.
    #[arg(long, value_parser = parse_rgb)]
    pub background: Option<[u8; 3]>,
    /// Text color as `R,G,B` or `#rrggbb`.
    #[arg(long, value_parser = parse_rgb)]
    pub ink: Option<[u8; 3]>,
    /// TrueType font for body text.
    #[arg(long = "font")]
    pub body_font: Option<PathBuf>,
    /// Body font size in pixels.
    #[arg(long = "font-size")]
    pub body_size: Option<f32>,
    /// TrueType font for the page marker.
    #[arg(long = "marker-font")]
    pub marker_font: Option<PathBuf>,
    /// Page marker font size in pixels.
    #[arg(long = "marker-size")]
    pub marker_size: Option<f32>,
    /// Skip font files and use the built-in bitmap font.
    #[arg(long = "bitmap-font", conflicts_with_all = ["body_font", "marker_font"])]
    pub bitmap_font: bool,
}

impl LayoutOptions {
    /// Resolve the effective configuration and validate it.
    pub fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };
        self.apply(&mut config);
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn apply(&self, config: &mut RenderConfig) {
        if let Some(value) = self.max_image_height {
            config.max_image_height = value;
        }
        if let Some(value) = self.wrap_width {
            config.wrap_width = value;
        }
        if let Some(value) = self.normal_line_spacing {
            config.normal_line_spacing = value;
        }
        if let Some(value) = self.extra_paragraph_spacing {
            config.extra_paragraph_spacing = value;
        }
        if let Some(value) = self.padding {
            config.padding = value;
        }
        if self.canvas_width.is_some() {
            config.canvas_width = self.canvas_width;
        }
        if let Some(value) = self.background {
            config.background = value;
        }
        if let Some(value) = self.ink {
            config.ink = value;
        }
        if let Some(path) = &self.body_font {
            config.body_font.path = Some(path.clone());
        }
        if let Some(size) = self.body_size {
            config.body_font.size = size;
        }
        if let Some(path) = &self.marker_font {
            config.marker_font.path = Some(path.clone());
        }
        if let Some(size) = self.marker_size {
            config.marker_font.size = size;
        }
        if self.bitmap_font {
            config.body_font.path = None;
            config.marker_font.path = None;
        }
    }
}
