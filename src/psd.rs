//! Adapter from the `psd` parser crate onto the document model.
//!
//! The rest of the crate only sees `Document` and `Layer`; everything
//! specific to the PSD format lives here. Layer pixel data is carried over
//! as the canvas-aligned RGBA buffers the parser produces and only cropped
//! when a layer is composed.

use std::fs;
use std::path::Path;

use ::psd::Psd;

use crate::document::{Document, Layer, LayerContent};
use crate::error::{Result, SpxError};

/// Open and fully parse a layered PSD document.
///
/// The whole file is decoded up front, so a malformed document fails here,
/// before the conversion pipeline writes anything.
pub fn open_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| SpxError::Input {
        path: path.to_path_buf(),
        message: format!("failed to read document: {}", e),
    })?;

    let psd = Psd::from_bytes(&bytes).map_err(|e| SpxError::Input {
        path: path.to_path_buf(),
        message: format!("failed to parse PSD: {}", e),
    })?;

    let canvas = (psd.width(), psd.height());
    let layers = psd
        .layers()
        .iter()
        .map(|layer| {
            // PSD bounding rects are top/left/bottom/right with exclusive
            // bottom/right edges.
            let left = layer.layer_left();
            let top = layer.layer_top();
            let width = (layer.layer_right() - left).max(0) as u32;
            let height = (layer.layer_bottom() - top).max(0) as u32;

            Layer::new(
                layer.name(),
                layer.visible(),
                (left, top),
                (width, height),
                LayerContent::CanvasAligned {
                    canvas,
                    rgba: layer.rgba(),
                },
            )
        })
        .collect();

    Ok(Document {
        width: canvas.0,
        height: canvas.1,
        layers,
    })
}
