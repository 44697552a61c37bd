//! PNG output for composed layers.

use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SpxError};

/// Write a composed layer buffer to a PNG file, preserving alpha.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| SpxError::Output {
        path: path.to_path_buf(),
        message: format!("failed to write PNG: {}", e),
    })
}
