//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Read the article from a file, or stdin when the path is `-`.
///
/// Invalid UTF-8 is replaced rather than rejected; the normalizer drops the
/// replacement characters later.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("failed to read input from stdin")?;
        buffer
    } else {
        fs::read(path).with_context(|| format!("failed to read input {}", path.display()))?
    };
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!("read {} byte(s) of input", bytes.len());
    Ok(text)
}

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Clap-friendly color parser for `R,G,B` triples and `#rrggbb` hex.
pub fn parse_rgb(input: &str) -> Result<[u8; 3], String> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err("hex color must look like #rrggbb".to_string());
        }
        let mut rgb = [0u8; 3];
        for (idx, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&hex[idx * 2..idx * 2 + 2], 16)
                .map_err(|_| format!("'{}' is not a hex color", input))?;
        }
        return Ok(rgb);
    }
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err("color must be R,G,B or #rrggbb".to_string());
    }
    let mut rgb = [0u8; 3];
    for (channel, part) in rgb.iter_mut().zip(parts) {
        *channel = part
            .parse()
            .map_err(|_| format!("color channel '{}' must be 0-255", part))?;
    }
    Ok(rgb)
}
