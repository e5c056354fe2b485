//! Typed errors raised by the layout library.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("wrap width must be at least 1 character")]
    ZeroWrapWidth,

    #[error("wrap width {width} exceeds the maximum of {max} characters")]
    WrapWidthTooLarge { width: usize, max: usize },

    #[error("canvas {which} {value}px exceeds the maximum of {max}px")]
    CanvasTooLarge {
        which: &'static str,
        value: u32,
        max: u32,
    },

    #[error("page height {height}px leaves no room for text inside {padding}px padding")]
    NoContentHeight { height: u32, padding: u32 },

    #[error("canvas width {width}px leaves no room for text inside {padding}px padding")]
    NoContentWidth { width: u32, padding: u32 },

    #[error("{which} spacing {value}px is taller than the {height}px page")]
    Spacing {
        which: &'static str,
        value: u32,
        height: u32,
    },

    #[error("{which} font size must be between 0 and {max}px (got {size})")]
    FontSize {
        which: &'static str,
        size: f32,
        max: f32,
    },
}

/// Reasons a TrueType font could not be used.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("no font path configured")]
    NotConfigured,

    #[error("failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path} is not a valid TrueType/OpenType font")]
    Invalid { path: PathBuf },
}
