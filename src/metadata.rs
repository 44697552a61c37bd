//! Sprite metadata and the `sprites.kml` text format.
//!
//! The consuming engine reads one aggregate metadata file per document:
//!
//! ```text
//! size <canvasWidth> <canvasHeight>
//!
//! sprite <name>
//! type <bg|obj|label>
//! offset <x> <y>
//! ```
//!
//! The `size` line comes first, then one blank-line-separated block per
//! sprite, in document layer order. Offsets are bottom-up: Y grows upward
//! from the bottom edge of the canvas, which is what the engine expects.

use std::fmt::Write;

use crate::document::SpriteKind;

/// Metadata record for one exported sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteEntry {
    /// Sprite name; also the PNG base name under `sprites/`.
    pub name: String,

    /// Classification derived from the layer name prefix.
    pub kind: SpriteKind,

    /// Bottom-left corner in bottom-up game coordinates.
    pub offset: (i32, i32),
}

/// Convert a layer's top-down document offset to bottom-up game coordinates.
///
/// X is unchanged; Y is measured from the bottom edge of the canvas to the
/// bottom edge of the layer: `out_y = doc_height - layer_height - y`.
pub fn game_offset(doc_height: u32, size: (u32, u32), offset: (i32, i32)) -> (i32, i32) {
    (offset.0, doc_height as i32 - size.1 as i32 - offset.1)
}

/// Render the aggregate metadata file.
pub fn render_kml(canvas: (u32, u32), entries: &[SpriteEntry]) -> String {
    let mut out = format!("size {} {}\n", canvas.0, canvas.1);
    for entry in entries {
        // Write fails only on OOM for String
        let _ = write!(
            out,
            "\nsprite {}\ntype {}\noffset {} {}\n",
            entry.name, entry.kind, entry.offset.0, entry.offset.1
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_game_offset_flips_y() {
        // 600-tall document, 48-tall layer at y=500 -> 600 - 48 - 500 = 52
        assert_eq!(game_offset(600, (32, 48), (100, 500)), (100, 52));
    }

    #[test]
    fn test_game_offset_full_canvas_layer() {
        assert_eq!(game_offset(600, (800, 600), (0, 0)), (0, 0));
    }

    #[test]
    fn test_game_offset_round_trip() {
        let (doc_height, size, offset) = (1080u32, (64u32, 128u32), (13, 400));
        let flipped = game_offset(doc_height, size, offset);
        // Applying the flip twice recovers the original offset
        assert_eq!(game_offset(doc_height, size, flipped), offset);
    }

    #[test]
    fn test_render_kml_empty_document() {
        assert_eq!(render_kml((320, 240), &[]), "size 320 240\n");
    }

    #[test]
    fn test_render_kml_single_sprite() {
        let entries = [SpriteEntry {
            name: "obj_player".to_string(),
            kind: SpriteKind::Obj,
            offset: (100, 52),
        }];

        assert_eq!(
            render_kml((800, 600), &entries),
            "size 800 600\n\nsprite obj_player\ntype obj\noffset 100 52\n"
        );
    }

    #[test]
    fn test_render_kml_name_with_spaces() {
        let entries = [SpriteEntry {
            name: "big old tree".to_string(),
            kind: SpriteKind::Bg,
            offset: (4, 5),
        }];

        assert_eq!(
            render_kml((10, 10), &entries),
            "size 10 10\n\nsprite big old tree\ntype bg\noffset 4 5\n"
        );
    }

    #[test]
    fn test_render_kml_block_layout() {
        let entries = [
            SpriteEntry {
                name: "bg_sky".to_string(),
                kind: SpriteKind::Bg,
                offset: (0, 0),
            },
            SpriteEntry {
                name: "obj_player".to_string(),
                kind: SpriteKind::Obj,
                offset: (100, 52),
            },
            SpriteEntry {
                name: "label_score".to_string(),
                kind: SpriteKind::Label,
                offset: (10, 570),
            },
        ];

        insta::assert_snapshot!(render_kml((800, 600), &entries), @r"
        size 800 600

        sprite bg_sky
        type bg
        offset 0 0

        sprite obj_player
        type obj
        offset 100 52

        sprite label_score
        type label
        offset 10 570
        ");
    }
}
