//! The document conversion pipeline.
//!
//! A single linear pass: validate the document, then per layer in document
//! order filter, classify, compose, verify, and export; the aggregate
//! metadata file is serialized last, only after every layer has succeeded.
//!
//! There is no rollback. A failure mid-run leaves the sprite PNGs written so
//! far on disk, but never a metadata file, so a failed run can simply be
//! re-run. The output directory is assumed to have a single writer.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{rect_in_canvas, Document, Layer, SpriteKind};
use crate::error::{Result, SpxError};
use crate::metadata::{game_offset, render_kml, SpriteEntry};
use crate::output::{display_path, Printer};
use crate::render::write_png;

/// Name of the aggregate metadata file, written under the output directory.
const METADATA_FILE: &str = "sprites.kml";

/// Name of the per-layer image subdirectory.
const SPRITES_DIR: &str = "sprites";

/// Paths produced by a successful conversion.
#[derive(Debug)]
pub struct Conversion {
    /// One PNG per exported sprite, in document order.
    pub sprites: Vec<PathBuf>,

    /// The aggregate metadata file.
    pub metadata_path: PathBuf,
}

/// Convert a document into per-layer PNGs plus one `sprites.kml`.
///
/// Layer names become file names verbatim, so they are validated (along with
/// layer bounds) before anything is written; rejections never leave partial
/// output behind.
pub fn convert_document(
    doc: &Document,
    output_dir: &Path,
    printer: &Printer,
) -> Result<Conversion> {
    validate_layers(doc, printer)?;

    let sprites_dir = output_dir.join(SPRITES_DIR);
    fs::create_dir_all(&sprites_dir).map_err(|e| SpxError::Output {
        path: sprites_dir.clone(),
        message: format!("failed to create sprites directory: {}", e),
    })?;

    let mut entries = Vec::new();
    let mut sprites = Vec::new();

    for layer in &doc.layers {
        if !layer.visible {
            printer.info("Skipping", &format!("hidden layer \"{}\"", layer.name));
            continue;
        }
        if is_empty(layer) {
            printer.warning("Skipping", &format!("empty layer \"{}\"", layer.name));
            continue;
        }

        let kind = SpriteKind::classify(&layer.name);
        let image = layer.compose()?;
        if (image.width(), image.height()) != layer.size {
            return Err(SpxError::Integrity {
                layer: layer.name.clone(),
                message: format!(
                    "composed buffer is {}x{}, layer declares {}x{}",
                    image.width(),
                    image.height(),
                    layer.size.0,
                    layer.size.1
                ),
            });
        }

        let path = sprites_dir.join(format!("{}.png", layer.name));
        write_png(&image, &path)?;
        printer.status(
            "Exporting",
            &format!(
                "{} ({}x{}) -> {}",
                layer.name,
                layer.size.0,
                layer.size.1,
                display_path(&path)
            ),
        );

        entries.push(SpriteEntry {
            name: layer.name.clone(),
            kind,
            offset: game_offset(doc.height, layer.size, layer.offset),
        });
        sprites.push(path);
    }

    let metadata_path = output_dir.join(METADATA_FILE);
    let kml = render_kml((doc.width, doc.height), &entries);
    fs::write(&metadata_path, kml).map_err(|e| SpxError::Output {
        path: metadata_path.clone(),
        message: format!("failed to write metadata: {}", e),
    })?;
    printer.status("Writing", &display_path(&metadata_path));

    Ok(Conversion {
        sprites,
        metadata_path,
    })
}

/// A visible layer with no pixels; the source format produces these for
/// layers that were never painted on.
fn is_empty(layer: &Layer) -> bool {
    layer.size.0 == 0 || layer.size.1 == 0
}

/// Check every layer that will be exported, before any writes happen.
///
/// Rejects names unusable as file names and layer rects outside the canvas.
/// Duplicate names are allowed (the last export wins) but warned about.
fn validate_layers(doc: &Document, printer: &Printer) -> Result<()> {
    let mut seen = HashSet::new();

    for layer in &doc.layers {
        if !layer.visible || is_empty(layer) {
            continue;
        }

        validate_name(&layer.name)?;

        let (x, y) = layer.offset;
        let (w, h) = layer.size;
        if !rect_in_canvas(layer.offset, layer.size, (doc.width, doc.height)) {
            return Err(SpxError::Layer {
                layer: layer.name.clone(),
                message: format!(
                    "rect {}x{} at ({}, {}) extends outside the {}x{} canvas",
                    w, h, x, y, doc.width, doc.height
                ),
                help: Some("move the layer fully inside the canvas".to_string()),
            });
        }

        if !seen.insert(layer.name.clone()) {
            printer.warning(
                "Duplicate",
                &format!("layer name \"{}\"; the later export wins", layer.name),
            );
        }
    }

    Ok(())
}

/// Layer names become `sprites/<name>.png`, so they must be valid file names.
fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty after trimming")
    } else if name.contains('/') || name.contains('\\') {
        Some("name contains a path separator")
    } else if name == "." || name == ".." {
        Some("name is not a usable file name")
    } else {
        None
    };

    match reason {
        Some(message) => Err(SpxError::Layer {
            layer: name.to_string(),
            message: message.to_string(),
            help: Some("rename the layer in the source document".to_string()),
        }),
        None => Ok(()),
    }
}
