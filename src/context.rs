//! Shared context for the invitation views.
//!
//! The config is provided once by `App`; components read it with
//! [`use_config`].

use dioxus::prelude::*;
use invitation_core::InvitationConfig;

/// Get the invitation config loaded at startup.
pub fn get_config() -> InvitationConfig {
    crate::get_config()
}

/// Hook to access the invitation config from context.
///
/// # Example
///
/// ```ignore
/// let config = use_config();
/// rsx! { h1 { "{config.event.headline}" } }
/// ```
pub fn use_config() -> InvitationConfig {
    use_context::<InvitationConfig>()
}
