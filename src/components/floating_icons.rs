//! Background icons drifting behind the hero

use dioxus::prelude::*;
use invitation_core::landing::floating_icons;

use crate::theme::colors::ICON_TINTS;

#[component]
pub fn FloatingIcons() -> Element {
    let icons: Vec<(usize, String, &'static str)> = floating_icons()
        .into_iter()
        .enumerate()
        .map(|(index, icon)| {
            let style = format!(
                "left: {}%; top: {}%; color: {}; animation-duration: {}s; animation-delay: {}s;",
                icon.left_pct,
                icon.top_pct,
                ICON_TINTS[index % ICON_TINTS.len()],
                icon.period_s,
                icon.delay_s
            );
            (index, style, icon.glyph)
        })
        .collect();

    rsx! {
        div { class: "floating-icons", "aria-hidden": "true",
            for (index, style, glyph) in icons {
                div {
                    key: "{index}",
                    class: "floating-icon",
                    style: "{style}",
                    "{glyph}"
                }
            }
        }
    }
}
