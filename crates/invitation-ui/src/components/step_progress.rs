//! Wizard progress dots

use dioxus::prelude::*;

/// One pill per wizard step; pills up to and including the current step are lit
#[component]
pub fn StepProgress(lit: [bool; 3]) -> Element {
    let dots: Vec<(usize, &'static str, f64)> = lit
        .iter()
        .enumerate()
        .map(|(index, &on)| {
            let class = if on { "step-dot lit" } else { "step-dot" };
            (index, class, index as f64 * 0.1)
        })
        .collect();

    rsx! {
        div { class: "step-progress",
            for (index, class, delay) in dots {
                div {
                    key: "{index}",
                    class: "{class}",
                    style: "animation-delay: {delay}s;",
                }
            }
        }
    }
}
