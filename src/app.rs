use dioxus::prelude::*;

use crate::context::get_config;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The invitation landing page (RSVP opens as a modal)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, invitation config, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
