//! Dioxus components for the invitation page.

mod confetti_overlay;
mod cursor_follower;
mod floating_icons;
mod rsvp_modal;

pub use confetti_overlay::ConfettiOverlay;
pub use cursor_follower::CursorFollower;
pub use floating_icons::FloatingIcons;
pub use rsvp_modal::RsvpModal;
