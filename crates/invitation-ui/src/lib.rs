//! Invitation UI Components
//!
//! Dioxus components for the party invitation's warm, playful look.
//!
//! ## Palette
//!
//! - **Orange (#fb923c)**: primary actions, hero accents
//! - **Pink (#f472b6)**: secondary accents, gradients
//! - **Purple (#c084fc)**: tertiary accents
//! - **Peach (#fff7ed)**: card and modal backgrounds

pub mod components;

pub use components::*;
