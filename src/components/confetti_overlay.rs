//! Confetti Overlay Component
//!
//! Full-screen, click-through overlay of falling confetti plus a few
//! bobbing party emoji. Shown for a fixed time after an RSVP call-to-action.

use dioxus::prelude::*;
use invitation_core::confetti::{ConfettiPiece, Shape, FLOATING_EMOJI};

/// Inline style for one falling piece.
///
/// Geometry differs by shape: triangles are drawn with borders, hearts and
/// stars as glyphs sized by font, the rest as filled boxes.
fn piece_style(piece: &ConfettiPiece) -> String {
    let motion = format!(
        "left: {:.2}%; --spin: {:.1}deg; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        piece.left_pct,
        piece.final_rotation_deg(),
        piece.duration_s,
        piece.delay_s
    );
    let size = piece.size_px;
    let look = match piece.shape {
        Shape::Triangle => format!(
            "border-left: {half:.1}px solid transparent; border-right: {half:.1}px solid transparent; \
             border-bottom: {size:.1}px solid {color};",
            half = size / 2.0,
            size = size,
            color = piece.color
        ),
        Shape::Heart | Shape::Star => format!("font-size: {:.1}px; color: {};", size, piece.color),
        Shape::Circle | Shape::Square => format!(
            "width: {size:.1}px; height: {size:.1}px; background-color: {color};",
            size = size,
            color = piece.color
        ),
    };
    format!("{} {}", motion, look)
}

#[component]
pub fn ConfettiOverlay(pieces: Vec<ConfettiPiece>) -> Element {
    let rendered: Vec<(usize, &'static str, String, &'static str)> = pieces
        .iter()
        .map(|piece| {
            (
                piece.id,
                piece.shape.class(),
                piece_style(piece),
                piece.shape.glyph().unwrap_or(""),
            )
        })
        .collect();

    rsx! {
        div { class: "confetti-overlay", "aria-hidden": "true",
            for (id, class, style, glyph) in rendered {
                div {
                    key: "{id}",
                    class: "confetti-piece {class}",
                    style: "{style}",
                    "{glyph}"
                }
            }

            for emoji in FLOATING_EMOJI.iter() {
                div {
                    key: "{emoji.glyph}",
                    class: "confetti-float",
                    style: "{emoji.position} animation-duration: {emoji.period_s}s; animation-delay: {emoji.delay_s}s;",
                    "{emoji.glyph}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(shape: Shape) -> ConfettiPiece {
        ConfettiPiece {
            id: 1,
            left_pct: 12.5,
            delay_s: 0.5,
            color: "#ff6b6b",
            size_px: 8.0,
            shape,
            rotation_deg: 90.0,
            duration_s: 4.0,
        }
    }

    #[test]
    fn triangle_uses_borders() {
        let style = piece_style(&piece(Shape::Triangle));
        assert!(style.contains("border-bottom: 8.0px solid #ff6b6b"));
        assert!(style.contains("--spin: 450.0deg"));
    }

    #[test]
    fn glyph_shapes_use_font_size() {
        let style = piece_style(&piece(Shape::Heart));
        assert!(style.contains("font-size: 8.0px"));
        assert!(!style.contains("background-color"));
    }

    #[test]
    fn boxes_are_filled() {
        let style = piece_style(&piece(Shape::Circle));
        assert!(style.contains("width: 8.0px; height: 8.0px; background-color: #ff6b6b;"));
        assert!(style.contains("left: 12.50%"));
    }
}
