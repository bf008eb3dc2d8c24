//! Landing page - the invitation itself.
//!
//! Hero, party details, highlights and a closing call-to-action. Sections
//! animate in once, the first time enough of them scrolls into view. Any
//! RSVP button opens the wizard and drops confetti for a few seconds.

use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use invitation_core::confetti::{self, ConfettiPiece};
use invitation_core::landing::{hero_parallax, scroll_progress, visible_fraction};
use invitation_core::{RevealTracker, Section};
use invitation_ui::{Button, ButtonVariant};
use tracing::debug;

use crate::components::{ConfettiOverlay, CursorFollower, FloatingIcons, RsvpModal};
use crate::context::use_config;
use crate::timers::use_one_shot;

type SectionNodes = [Option<Rc<MountedData>>; 4];

fn reveal_class(tracker: &RevealTracker, section: Section) -> &'static str {
    if tracker.is_revealed(section) {
        "reveal visible"
    } else {
        "reveal"
    }
}

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_config();
    let event = config.event.clone();
    let confetti_delay = config.delays.confetti();

    let mut show_rsvp = use_signal(|| false);
    let mut confetti_pieces: Signal<Option<Vec<ConfettiPiece>>> = use_signal(|| None);
    let mut confetti_timer = use_one_shot();
    let mut cursor = use_signal(|| (0.0f64, 0.0f64));
    let mut progress = use_signal(|| 0.0f64);
    let mut tracker = use_signal(RevealTracker::new);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut sections: Signal<SectionNodes> = use_signal(|| [None, None, None, None]);

    // Measure the page and reveal any section that crossed its threshold
    let refresh = move || {
        spawn(async move {
            let Some(page) = container() else { return };
            let Ok(viewport) = page.get_client_rect().await else {
                return;
            };
            let viewport_height = viewport.size.height;

            if let (Ok(offset), Ok(size)) =
                (page.get_scroll_offset().await, page.get_scroll_size().await)
            {
                progress.set(scroll_progress(offset.y, size.height, viewport_height));
            }

            for (index, section) in Section::ALL.iter().enumerate() {
                let node = sections.read()[index].clone();
                let Some(node) = node else { continue };
                if let Ok(rect) = node.get_client_rect().await {
                    let top = rect.origin.y - viewport.origin.y;
                    let fraction = visible_fraction(top, rect.size.height, viewport_height);
                    if tracker.write().observe(*section, fraction) {
                        debug!("Revealed section '{}'", section.id());
                    }
                }
            }
        });
    };

    let mut track_section = move |section: Section, node: Rc<MountedData>| {
        if let Some(index) = Section::ALL.iter().position(|s| *s == section) {
            sections.write()[index] = Some(node);
        }
        refresh();
    };

    let mut celebrate = move || {
        confetti_pieces.set(Some(confetti::burst()));
        confetti_timer.schedule(confetti_delay, move || confetti_pieces.set(None));
        show_rsvp.set(true);
    };

    let scroll_to = move |section: Section| {
        let index = Section::ALL.iter().position(|s| *s == section);
        if let Some(node) = index.and_then(|i| sections.read()[i].clone()) {
            spawn(async move {
                let _ = node.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    };

    let (hero_y, hero_opacity) = hero_parallax(progress());
    let (cursor_x, cursor_y) = cursor();
    let revealed = tracker.read().clone();
    let hero_class = reveal_class(&revealed, Section::Hero);
    let details_class = reveal_class(&revealed, Section::Details);
    let features_class = reveal_class(&revealed, Section::Features);
    let cta_class = reveal_class(&revealed, Section::Cta);
    let date_display = event.date_display();

    let details = [
        ("📅", "Date", date_display, "card-orange", 0),
        ("🕛", "Time", event.time.clone(), "card-pink", 200),
        ("📍", "Location", event.location.clone(), "card-blue", 400),
    ];
    let highlight_icons = ["🎂", "🎵", "👥", "📸"];
    let note_icons = ["💖", "✨", "⏰", "🎁"];
    let highlights: Vec<(String, &'static str)> = event
        .highlights
        .iter()
        .cloned()
        .zip(highlight_icons.iter().cycle().copied())
        .collect();
    let notes: Vec<(String, &'static str)> = event
        .notes
        .iter()
        .cloned()
        .zip(note_icons.iter().cycle().copied())
        .collect();

    rsx! {
        main {
            class: "landing",
            onmounted: move |e| {
                container.set(Some(e.data()));
                refresh();
            },
            onscroll: move |_| refresh(),
            onmousemove: move |e| {
                let point = e.client_coordinates();
                cursor.set((point.x, point.y));
            },

            if let Some(pieces) = confetti_pieces() {
                ConfettiOverlay { pieces: pieces }
            }

            FloatingIcons {}
            CursorFollower { x: cursor_x, y: cursor_y }

            // Hero
            section {
                id: Section::Hero.id(),
                class: "hero {hero_class}",
                style: "transform: translateY({hero_y}px); opacity: {hero_opacity};",
                onmounted: move |e| track_section(Section::Hero, e.data()),

                div { class: "hero-badge", "✨ {event.badge}" }
                h1 { class: "hero-title",
                    span { class: "gradient-text", "{event.headline}" }
                }
                p { class: "hero-tagline",
                    "Help us make "
                    span { class: "honoree", "{event.honoree_full_name}'s" }
                    " special day absolutely unforgettable with love, laughter, and magical memories"
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        large: true,
                        onclick: move |_| celebrate(),
                        "🎉 RSVP Now!"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        large: true,
                        onclick: move |_| scroll_to(Section::Features),
                        "🎁 Gift Ideas"
                    }
                }
                div { class: "hero-hints",
                    span { "🤫 Shh... it's a surprise!" }
                    button {
                        class: "scroll-hint",
                        onclick: move |_| scroll_to(Section::Details),
                        "Scroll down for more details"
                        span { class: "scroll-chevron", "⌄" }
                    }
                }
            }

            // Party details
            section {
                id: Section::Details.id(),
                class: "details {details_class}",
                onmounted: move |e| track_section(Section::Details, e.data()),

                h2 { class: "section-header gradient-text", "Party Details" }
                div { class: "detail-grid",
                    for (icon, title, content, tint, delay_ms) in details {
                        div {
                            key: "{title}",
                            class: "detail-card {tint}",
                            style: "transition-delay: {delay_ms}ms;",
                            div { class: "detail-icon", "{icon}" }
                            h3 { class: "detail-title", "{title}" }
                            p { class: "detail-content", "{content}" }
                        }
                    }
                }
            }

            // Highlights and notes
            section {
                id: Section::Features.id(),
                class: "features {features_class}",
                onmounted: move |e| track_section(Section::Features, e.data()),

                h2 { class: "section-header gradient-text", "Let's Make It Magical" }
                div { class: "feature-grid",
                    div { class: "feature-card",
                        div { class: "feature-card-head", span { "🎉" } h3 { "What to Expect" } }
                        ul { class: "feature-list",
                            for (text, icon) in highlights {
                                li { key: "{text}", span { class: "feature-icon", "{icon}" } "{text}" }
                            }
                        }
                    }
                    div { class: "feature-card",
                        div { class: "feature-card-head", span { "⭐" } h3 { "Important Notes" } }
                        ul { class: "feature-list",
                            for (text, icon) in notes {
                                li { key: "{text}", span { class: "feature-icon", "{icon}" } "{text}" }
                            }
                        }
                    }
                }
            }

            // Closing call-to-action
            section {
                id: Section::Cta.id(),
                class: "cta {cta_class}",
                onmounted: move |e| track_section(Section::Cta, e.data()),

                h2 { class: "cta-title glow-pulse", "{event.cta_title}" }
                p { class: "cta-body", "{event.cta_body}" }
                Button {
                    variant: ButtonVariant::Primary,
                    large: true,
                    onclick: move |_| celebrate(),
                    "💌 RSVP Now!"
                }
            }

            footer { class: "landing-footer",
                "Made with 💖 for {event.honoree}"
            }

            RsvpModal {
                show: show_rsvp(),
                on_close: move |_| show_rsvp.set(false),
            }
        }
    }
}
