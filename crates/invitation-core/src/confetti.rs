//! Confetti particle layout.
//!
//! A burst is a fixed number of pieces falling from above the viewport,
//! each with its own column, colour, size, shape, spin and timing. The
//! view turns each piece into a CSS animation.

use rand::Rng;

/// Pieces per burst
pub const PIECE_COUNT: usize = 80;

/// Warm party palette with a few cool accents
pub const PALETTE: [&str; 16] = [
    "#ff6b6b", "#ff8e53", "#ff6b9d", "#c44569", "#f8b500", "#ffa726", "#ffcc02", "#f39c12",
    "#ff9ff3", "#f368e0", "#ff3838", "#ff6348", "#70a1ff", "#5352ed", "#3742fa", "#2f3542",
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Heart,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Heart,
        Shape::Star,
    ];

    /// How many times the base rotation is applied over the fall
    pub fn spin_multiplier(&self) -> f64 {
        match self {
            Shape::Circle => 4.0,
            Shape::Square => 3.0,
            Shape::Triangle => 5.0,
            Shape::Heart => 2.0,
            Shape::Star => 6.0,
        }
    }

    /// Glyph for text-rendered shapes
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            Shape::Heart => Some("❤️"),
            Shape::Star => Some("⭐"),
            _ => None,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Shape::Circle => "confetti-circle",
            Shape::Square => "confetti-square",
            Shape::Triangle => "confetti-triangle",
            Shape::Heart => "confetti-heart",
            Shape::Star => "confetti-star",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ConfettiPiece {
    pub id: usize,
    /// Horizontal position, percent of viewport width
    pub left_pct: f64,
    /// Seconds before the piece starts falling
    pub delay_s: f64,
    pub color: &'static str,
    /// 4..12 px
    pub size_px: f64,
    pub shape: Shape,
    pub rotation_deg: f64,
    /// 3..5 s fall
    pub duration_s: f64,
}

impl ConfettiPiece {
    /// Total rotation applied by the end of the fall
    pub fn final_rotation_deg(&self) -> f64 {
        self.rotation_deg * self.shape.spin_multiplier()
    }
}

/// Lay out `count` randomly varied pieces
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|id| ConfettiPiece {
            id,
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..4.0),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            size_px: rng.random_range(4.0..12.0),
            shape: Shape::ALL[rng.random_range(0..Shape::ALL.len())],
            rotation_deg: rng.random_range(0.0..360.0),
            duration_s: rng.random_range(3.0..5.0),
        })
        .collect()
}

/// A burst of [`PIECE_COUNT`] pieces from the thread RNG
pub fn burst() -> Vec<ConfettiPiece> {
    generate(PIECE_COUNT, &mut rand::rng())
}

/// Bobbing party emoji pinned around the overlay
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FloatingEmoji {
    pub glyph: &'static str,
    /// CSS position declarations
    pub position: &'static str,
    pub period_s: f64,
    pub delay_s: f64,
}

pub const FLOATING_EMOJI: [FloatingEmoji; 4] = [
    FloatingEmoji {
        glyph: "🎂",
        position: "top: 2.5rem; left: 2.5rem;",
        period_s: 3.0,
        delay_s: 0.0,
    },
    FloatingEmoji {
        glyph: "🎈",
        position: "top: 5rem; right: 5rem;",
        period_s: 2.5,
        delay_s: 0.5,
    },
    FloatingEmoji {
        glyph: "🎉",
        position: "bottom: 5rem; left: 25%;",
        period_s: 4.0,
        delay_s: 1.0,
    },
    FloatingEmoji {
        glyph: "🥳",
        position: "bottom: 8rem; right: 33%;",
        period_s: 3.5,
        delay_s: 1.5,
    },
];
