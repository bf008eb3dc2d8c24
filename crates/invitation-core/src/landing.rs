//! Landing-page motion: once-only section reveals, hero parallax and the
//! pointer follower.

use std::collections::HashSet;

/// Scroll-revealed sections of the landing page, top to bottom
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Section {
    Hero,
    Details,
    Features,
    Cta,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Details, Section::Features, Section::Cta];

    /// Fraction of the section that must be on screen to reveal it
    pub fn threshold(&self) -> f64 {
        match self {
            Section::Hero | Section::Cta => 0.3,
            Section::Details | Section::Features => 0.2,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Details => "details",
            Section::Features => "features",
            Section::Cta => "cta",
        }
    }
}

/// Fraction of an element of `height` at `top` (viewport coordinates) that
/// lies within a viewport of `viewport_height`
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(0.0);
    let visible_bottom = (top + height).min(viewport_height);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

/// Tracks which sections have already played their entrance animation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<Section>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report how much of `section` is visible.
    ///
    /// Returns `true` only the first time the fraction reaches the
    /// section's threshold; once revealed a section never re-triggers.
    pub fn observe(&mut self, section: Section, fraction: f64) -> bool {
        if fraction >= section.threshold() {
            self.revealed.insert(section)
        } else {
            false
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }
}

/// Scroll progress in [0, 1] for a scroll container
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Hero drift and fade for a scroll progress.
///
/// Returns `(translate_y_px, opacity)`: the hero rises 50px over the whole
/// page and fades out across the first 30%.
pub fn hero_parallax(progress: f64) -> (f64, f64) {
    let progress = progress.clamp(0.0, 1.0);
    let translate_y = -50.0 * progress;
    let opacity = (1.0 - progress / 0.3).clamp(0.0, 1.0);
    (translate_y, opacity)
}

/// Diameter of the pointer follower, px
pub const CURSOR_SIZE: f64 = 24.0;

/// Top-left corner that centers the follower on the pointer
pub fn cursor_offset(x: f64, y: f64) -> (f64, f64) {
    (x - CURSOR_SIZE / 2.0, y - CURSOR_SIZE / 2.0)
}

/// Placement of one decorative floating icon in the hero background
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FloatingIcon {
    pub glyph: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub period_s: f64,
    pub delay_s: f64,
}

const ICON_GLYPHS: [(&str, f64); 6] = [
    ("🎁", 0.0),
    ("⭐", 1.0),
    ("✨", 2.0),
    ("💖", 0.5),
    ("🎉", 1.5),
    ("🎵", 2.5),
];

/// The six background icons, staggered diagonally across the hero
pub fn floating_icons() -> Vec<FloatingIcon> {
    ICON_GLYPHS
        .iter()
        .enumerate()
        .map(|(i, &(glyph, delay_s))| FloatingIcon {
            glyph,
            left_pct: 10.0 + i as f64 * 15.0,
            top_pct: 20.0 + i as f64 * 10.0,
            period_s: 4.0 + i as f64,
            delay_s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_fraction_cases() {
        // Fully inside
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
        // Below the fold
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        // Half scrolled off the top
        assert_eq!(visible_fraction(-100.0, 200.0, 800.0), 0.5);
        // Peeking in from the bottom
        assert_eq!(visible_fraction(750.0, 200.0, 800.0), 0.25);
        assert_eq!(visible_fraction(0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn reveal_fires_once() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(Section::Hero, 0.29));
        assert!(tracker.observe(Section::Hero, 0.3));
        assert!(!tracker.observe(Section::Hero, 1.0));
        assert!(!tracker.observe(Section::Hero, 0.0));
        assert!(tracker.is_revealed(Section::Hero));
        assert!(!tracker.is_revealed(Section::Details));
    }

    #[test]
    fn thresholds_per_section() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.observe(Section::Details, 0.2));
        assert!(!tracker.observe(Section::Cta, 0.2));
    }

    #[test]
    fn parallax_endpoints() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
        assert_eq!(hero_parallax(1.0), (-50.0, 0.0));
        let (_, opacity) = hero_parallax(0.15);
        assert!((opacity - 0.5).abs() < 1e-9);
        assert_eq!(hero_parallax(0.5).1, 0.0);
        assert_eq!(hero_parallax(-3.0), (0.0, 1.0));
    }

    #[test]
    fn scroll_progress_handles_short_pages() {
        assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(600.0, 1400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 1400.0, 800.0), 0.5);
    }

    #[test]
    fn icons_staggered() {
        let icons = floating_icons();
        assert_eq!(icons.len(), 6);
        assert_eq!(icons[0].left_pct, 10.0);
        assert_eq!(icons[5].left_pct, 85.0);
        assert_eq!(icons[5].top_pct, 70.0);
        assert_eq!(icons[2].period_s, 6.0);
        assert_eq!(cursor_offset(100.0, 50.0), (88.0, 38.0));
    }
}
