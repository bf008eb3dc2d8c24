//! Color constants for the invitation.
//!
//! Orange, pink and purple party accents on a peach background. The CSS
//! custom properties in `styles.rs` mirror these values.

// === ACCENTS ===
pub const ORANGE: &str = "#fb923c";
pub const PINK: &str = "#f472b6";
pub const PURPLE: &str = "#c084fc";
pub const RED: &str = "#f87171";
pub const YELLOW: &str = "#facc15";
pub const BLUE: &str = "#60a5fa";

/// Tints for the hero's floating icons, in icon order
pub const ICON_TINTS: [&str; 6] = [PINK, YELLOW, PURPLE, RED, ORANGE, BLUE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_are_hex() {
        for tint in ICON_TINTS {
            assert!(tint.starts_with('#') && tint.len() == 7, "{tint}");
        }
    }
}
