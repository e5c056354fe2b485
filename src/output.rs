//! Output directory handling and PNG writing.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use image::{ImageFormat, RgbImage};
use log::{debug, info, warn};
use sha2::{Digest, Sha256};

use crate::document::PagedDocument;
use crate::manifest::{Manifest, ManifestPage};
use crate::raster::PageFonts;

/// Zero-padded file name for a 1-based page index, e.g. `007.png`.
pub fn page_file_name(index: usize) -> String {
    format!("{index:03}.png")
}

/// Create `dir`, or empty it if it already exists.
///
/// Everything inside is deleted without confirmation: the directory belongs to
/// this run. Returns the number of removed entries.
pub fn prepare_output_dir(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        return Ok(0);
    }
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list output directory {}", dir.display()))?;
    let mut removed = 0usize;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list output directory {}", dir.display()))?
            .path();
        let cleared = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        cleared.with_context(|| format!("failed to clear {}", path.display()))?;
        removed += 1;
    }
    if removed > 0 {
        warn!("cleared {} existing entries from {}", removed, dir.display());
    }
    Ok(removed)
}

/// Encode a page as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("failed to encode page as PNG")?;
    Ok(bytes)
}

/// Result of [`render_to_dir`].
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub output_dir: PathBuf,
    pub pages: Vec<ManifestPage>,
    pub manifest: Option<PathBuf>,
}

impl RenderSummary {
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }
}

/// Clear `dir` and write one PNG per page, plus `manifest.json` when asked.
pub fn render_to_dir(
    doc: &PagedDocument,
    fonts: &PageFonts,
    dir: &Path,
    write_manifest: bool,
) -> Result<RenderSummary> {
    prepare_output_dir(dir)?;

    let mut written = Vec::with_capacity(doc.total_pages());
    for page in &doc.pages {
        let image = doc.render_page(page, fonts);
        let bytes = encode_png(&image)
            .with_context(|| format!("failed to render page {}", page.marker()))?;
        let file = page_file_name(page.index);
        let path = dir.join(&file);
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write page {}", path.display()))?;
        debug!("wrote {} ({} line(s))", path.display(), page.lines.len());
        written.push(ManifestPage {
            index: page.index,
            file,
            line_count: page.lines.len(),
            sha256: format!("{:x}", Sha256::digest(&bytes)),
        });
    }

    let manifest = if write_manifest {
        let manifest = Manifest {
            generated_at: Utc::now(),
            total_pages: doc.total_pages(),
            canvas_width: doc.canvas.width,
            canvas_height: doc.canvas.height,
            body_font: fonts.body.kind(),
            marker_font: fonts.marker.kind(),
            pages: written.clone(),
        };
        Some(manifest.save(dir)?)
    } else {
        None
    };

    info!("wrote {} page(s) to {}", written.len(), dir.display());
    Ok(RenderSummary {
        output_dir: dir.to_path_buf(),
        pages: written,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(page_file_name(1), "001.png");
        assert_eq!(page_file_name(42), "042.png");
        assert_eq!(page_file_name(1234), "1234.png");
    }

    #[test]
    fn prepare_creates_missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("images");
        assert_eq!(prepare_output_dir(&dir).unwrap(), 0);
        assert!(dir.is_dir());
    }

    #[test]
    fn prepare_empties_existing_directory() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("old.png"), b"x").unwrap();
        fs::create_dir(root.path().join("sub")).unwrap();
        fs::write(root.path().join("sub").join("f"), b"y").unwrap();
        assert_eq!(prepare_output_dir(root.path()).unwrap(), 2);
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn encoded_png_round_trips_dimensions() {
        let image = RgbImage::from_pixel(7, 3, image::Rgb([1, 2, 3]));
        let bytes = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (7, 3));
    }
}
