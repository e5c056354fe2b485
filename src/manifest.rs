//! `manifest.json` written next to the page images on request.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::raster::FontKind;

pub const MANIFEST_FILE: &str = "manifest.json";

/// One written page image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestPage {
    pub index: usize,
    pub file: String,
    pub line_count: usize,
    /// SHA-256 of the PNG bytes, lowercase hex.
    pub sha256: String,
}

/// Summary of a render run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub total_pages: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub body_font: FontKind,
    pub marker_font: FontKind,
    pub pages: Vec<ManifestPage>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse manifest {}", path.display()))
    }

    /// Write as pretty JSON into `dir`, returning the file path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize manifest")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(path)
    }
}
