//! spx - Sprite and metadata exporter for layered game art.
//!
//! Converts a layered PSD document into one PNG per visible layer plus a
//! `sprites.kml` metadata file the game engine consumes: sprite names,
//! prefix-derived types, and offsets flipped into the engine's bottom-up
//! coordinate convention.

pub mod cli;
pub mod convert;
pub mod document;
pub mod error;
pub mod metadata;
pub mod output;
pub mod psd;
pub mod render;

pub use convert::{convert_document, Conversion};
pub use document::{Document, Layer, LayerContent, SpriteKind};
pub use error::{Result, SpxError};
pub use metadata::{game_offset, render_kml, SpriteEntry};
pub use crate::psd::open_document;
pub use render::write_png;
