use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::wrap::DEFAULT_WRAP_WIDTH;

const DEFAULT_FONT_FILE: &str = "Roboto-Regular.ttf";

/// Largest accepted page width or height in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: f32 = 512.0;
/// Largest accepted wrap width in characters.
pub const MAX_WRAP_WIDTH: usize = 1000;

/// Font file and pixel size (em height) for one text role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// `None` skips straight to the built-in bitmap font.
    pub path: Option<PathBuf>,
    pub size: f32,
}

impl FontSpec {
    pub fn new(path: Option<PathBuf>, size: f32) -> Self {
        Self { path, size }
    }
}

/// Every tunable of a run. Built once and passed by reference to each stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Height of every output image.
    pub max_image_height: u32,
    /// Maximum characters per wrapped line.
    pub wrap_width: usize,
    /// Added below every text line.
    pub normal_line_spacing: u32,
    /// Added below every paragraph spacer.
    pub extra_paragraph_spacing: u32,
    /// Margin on all four sides of the canvas.
    pub padding: u32,
    /// Fixed canvas width; `None` sizes the canvas for `wrap_width` of the
    /// body font's widest character.
    pub canvas_width: Option<u32>,
    pub background: [u8; 3],
    pub ink: [u8; 3],
    pub body_font: FontSpec,
    pub marker_font: FontSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_image_height: 1200,
            wrap_width: DEFAULT_WRAP_WIDTH,
            normal_line_spacing: 4,
            extra_paragraph_spacing: 25,
            padding: 20,
            canvas_width: None,
            background: [250, 250, 250],
            ink: [0, 0, 0],
            body_font: FontSpec::new(Some(PathBuf::from(DEFAULT_FONT_FILE)), 36.0),
            marker_font: FontSpec::new(Some(PathBuf::from(DEFAULT_FONT_FILE)), 18.0),
        }
    }
}

impl RenderConfig {
    /// Read a JSON config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: RenderConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Vertical space available for lines on one page.
    pub fn content_height(&self) -> u32 {
        self.max_image_height.saturating_sub(self.padding.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wrap_width == 0 {
            return Err(ConfigError::ZeroWrapWidth);
        }
        if self.wrap_width > MAX_WRAP_WIDTH {
            return Err(ConfigError::WrapWidthTooLarge {
                width: self.wrap_width,
                max: MAX_WRAP_WIDTH,
            });
        }
        if self.max_image_height > MAX_CANVAS_DIMENSION {
            return Err(ConfigError::CanvasTooLarge {
                which: "height",
                value: self.max_image_height,
                max: MAX_CANVAS_DIMENSION,
            });
        }
        if self.content_height() == 0 {
            return Err(ConfigError::NoContentHeight {
                height: self.max_image_height,
                padding: self.padding,
            });
        }
        if let Some(width) = self.canvas_width {
            if width > MAX_CANVAS_DIMENSION {
                return Err(ConfigError::CanvasTooLarge {
                    which: "width",
                    value: width,
                    max: MAX_CANVAS_DIMENSION,
                });
            }
            if width <= self.padding.saturating_mul(2) {
                return Err(ConfigError::NoContentWidth {
                    width,
                    padding: self.padding,
                });
            }
        }
        for (which, value) in [
            ("line", self.normal_line_spacing),
            ("paragraph", self.extra_paragraph_spacing),
        ] {
            if value > self.max_image_height {
                return Err(ConfigError::Spacing {
                    which,
                    value,
                    height: self.max_image_height,
                });
            }
        }
        for (which, spec) in [("body", &self.body_font), ("marker", &self.marker_font)] {
            if !(spec.size > 0.0 && spec.size <= MAX_FONT_SIZE) {
                return Err(ConfigError::FontSize {
                    which,
                    size: spec.size,
                    max: MAX_FONT_SIZE,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate() {
        let config = RenderConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.content_height(), 1160);
    }

    #[test]
    fn rejects_zero_wrap_width() {
        let config = RenderConfig {
            wrap_width: 0,
            ..RenderConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWrapWidth));
    }

    #[test]
    fn rejects_padding_that_swallows_the_page() {
        let config = RenderConfig {
            max_image_height: 40,
            padding: 20,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoContentHeight {
                height: 40,
                padding: 20
            })
        );
    }

    #[test]
    fn rejects_non_positive_font_size() {
        let mut config = RenderConfig::default();
        config.marker_font.size = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FontSize {
                which: "marker",
                ..
            })
        ));
    }

    #[test]
    fn rejects_huge_and_non_finite_font_sizes() {
        for size in [1e12, f32::INFINITY, f32::NAN] {
            let mut config = RenderConfig::default();
            config.body_font.size = size;
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::FontSize { which: "body", .. })
                ),
                "size {size} accepted"
            );
        }
    }

    #[test]
    fn rejects_spacing_taller_than_the_page() {
        let config = RenderConfig {
            extra_paragraph_spacing: u32::MAX,
            ..RenderConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Spacing {
                which: "paragraph",
                value: u32::MAX,
                height: 1200
            })
        );
        let config = RenderConfig {
            normal_line_spacing: 1201,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Spacing { which: "line", .. })
        ));
    }

    #[test]
    fn huge_padding_is_rejected_without_overflow() {
        let config = RenderConfig {
            padding: 3_000_000_000,
            ..RenderConfig::default()
        };
        assert_eq!(config.content_height(), 0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoContentHeight {
                height: 1200,
                padding: 3_000_000_000
            })
        );
        let config = RenderConfig {
            padding: 3_000_000_000,
            max_image_height: u32::MAX,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_canvas_and_wrap_width() {
        let config = RenderConfig {
            max_image_height: MAX_CANVAS_DIMENSION + 1,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasTooLarge { which: "height", .. })
        ));
        let config = RenderConfig {
            canvas_width: Some(u32::MAX),
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CanvasTooLarge { which: "width", .. })
        ));
        let config = RenderConfig {
            wrap_width: usize::MAX,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WrapWidthTooLarge { .. })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "wrap_width": 50, "background": [255, 255, 255] }}"#).unwrap();
        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.wrap_width, 50);
        assert_eq!(config.background, [255, 255, 255]);
        assert_eq!(config.max_image_height, 1200);
        assert_eq!(config.body_font.size, 36.0);
    }

    #[test]
    fn load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = RenderConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
