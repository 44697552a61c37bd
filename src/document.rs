//! Document and layer model for layered image files.
//!
//! This is the contract the conversion pipeline works against: a `Document`
//! with fixed canvas dimensions and an ordered list of `Layer`s, each with a
//! name, visibility flag, bounding box, and a `compose` operation that
//! flattens the layer to an RGBA buffer. Format adapters (see `crate::psd`)
//! build this model; the pipeline never touches the underlying parser.

use image::RgbaImage;

use crate::error::{Result, SpxError};

/// Ordered prefix table for sprite classification.
///
/// Resolved by first match; names matching no prefix are background sprites.
/// Matching is case-sensitive and a name equal to a bare prefix still counts.
const KIND_PREFIXES: &[(&str, SpriteKind)] = &[
    ("obj_", SpriteKind::Obj),
    ("label_", SpriteKind::Label),
];

/// Sprite classification, derived from the layer name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Static background art (the default).
    Bg,
    /// Interactive or movable object.
    Obj,
    /// Text label overlay.
    Label,
}

impl SpriteKind {
    /// Classify a trimmed layer name by reserved prefix.
    pub fn classify(name: &str) -> Self {
        KIND_PREFIXES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map(|&(_, kind)| kind)
            .unwrap_or(Self::Bg)
    }

    /// The keyword written to the metadata file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Obj => "obj",
            Self::Label => "label",
        }
    }
}

impl std::fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a layer rect lies fully inside a canvas.
pub(crate) fn rect_in_canvas(offset: (i32, i32), size: (u32, u32), canvas: (u32, u32)) -> bool {
    let (x, y) = offset;
    let (w, h) = size;
    x >= 0
        && y >= 0
        && x as i64 + w as i64 <= canvas.0 as i64
        && y as i64 + h as i64 <= canvas.1 as i64
}

/// A layered image document.
///
/// Canvas dimensions are fixed once the document is opened. Layer order is
/// the document's own order and drives both export and metadata order.
#[derive(Debug)]
pub struct Document {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Layers in document order.
    pub layers: Vec<Layer>,
}

/// One layer of a document.
#[derive(Debug)]
pub struct Layer {
    /// Layer name, trimmed of surrounding whitespace.
    pub name: String,

    /// Hidden layers are excluded from all output.
    pub visible: bool,

    /// Top-left corner of the bounding box, in top-down document coordinates.
    pub offset: (i32, i32),

    /// Bounding box dimensions. Must match the composed buffer exactly.
    pub size: (u32, u32),

    /// Pixel content, in whichever shape the source format provides it.
    pub content: LayerContent,
}

/// Pixel content backing a layer.
#[derive(Debug)]
pub enum LayerContent {
    /// An already-flat buffer with the layer's own dimensions.
    Composed(RgbaImage),

    /// A raw RGBA buffer aligned to the full canvas, with the layer's pixels
    /// at their document position. PSD parsing yields this shape; `compose`
    /// crops the layer rect out of it.
    CanvasAligned { canvas: (u32, u32), rgba: Vec<u8> },
}

impl Layer {
    /// Create a layer, trimming the name.
    pub fn new(
        name: impl Into<String>,
        visible: bool,
        offset: (i32, i32),
        size: (u32, u32),
        content: LayerContent,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            visible,
            offset,
            size,
            content,
        }
    }

    /// Flatten the layer to a buffer with the layer's own dimensions.
    ///
    /// A content buffer that agrees with neither the layer rect nor the
    /// canvas is reported as an integrity failure, as is a layer rect that
    /// falls outside a canvas-aligned buffer.
    pub fn compose(&self) -> Result<RgbaImage> {
        let (w, h) = self.size;
        match &self.content {
            LayerContent::Composed(image) => Ok(image.clone()),
            LayerContent::CanvasAligned { canvas, rgba } => {
                let (cw, ch) = *canvas;
                let layer_len = w as usize * h as usize * 4;
                let canvas_len = cw as usize * ch as usize * 4;

                if rgba.len() == layer_len {
                    // Some sources hand back a tight buffer; take it as-is.
                    return RgbaImage::from_raw(w, h, rgba.clone()).ok_or_else(|| {
                        SpxError::Integrity {
                            layer: self.name.clone(),
                            message: "pixel buffer does not match layer dimensions".to_string(),
                        }
                    });
                }

                if rgba.len() != canvas_len {
                    return Err(SpxError::Integrity {
                        layer: self.name.clone(),
                        message: format!(
                            "pixel buffer holds {} bytes, expected {} (layer) or {} (canvas)",
                            rgba.len(),
                            layer_len,
                            canvas_len
                        ),
                    });
                }

                let (x, y) = self.offset;
                if !rect_in_canvas(self.offset, self.size, *canvas) {
                    return Err(SpxError::Integrity {
                        layer: self.name.clone(),
                        message: format!(
                            "layer rect {}x{} at ({}, {}) exceeds the {}x{} canvas",
                            w, h, x, y, cw, ch
                        ),
                    });
                }

                let full = RgbaImage::from_raw(cw, ch, rgba.clone()).ok_or_else(|| {
                    SpxError::Integrity {
                        layer: self.name.clone(),
                        message: "pixel buffer does not match canvas dimensions".to_string(),
                    }
                })?;
                Ok(image::imageops::crop_imm(&full, x as u32, y as u32, w, h).to_image())
            }
        }
    }
}
