//! Party-size stepper
//!
//! Minus/plus buttons around the current guest count. The buttons are
//! disabled at the bounds; the count itself clamps regardless.

use dioxus::prelude::*;
use invitation_core::GuestCount;

/// Properties for the GuestStepper component
#[derive(Clone, PartialEq, Props)]
pub struct GuestStepperProps {
    pub count: GuestCount,
    pub on_change: EventHandler<GuestCount>,
}

#[component]
pub fn GuestStepper(props: GuestStepperProps) -> Element {
    let count = props.count;
    let on_change = props.on_change;

    let decrement = move |_| {
        let mut next = count;
        next.decrement();
        on_change.call(next);
    };
    let increment = move |_| {
        let mut next = count;
        next.increment();
        on_change.call(next);
    };

    rsx! {
        div { class: "guest-stepper rise-in",
            label { class: "input-label",
                span { class: "input-icon accent-purple", "👥" }
                "Number of Guests (including you)"
            }
            div { class: "stepper-row",
                button {
                    class: "stepper-btn",
                    r#type: "button",
                    "aria-label": "Fewer guests",
                    disabled: count.at_min(),
                    onclick: decrement,
                    "-"
                }
                div { class: "stepper-value",
                    span { class: "stepper-number", "{count}" }
                    span { class: "stepper-caption",
                        if count.get() == 1 { "guest" } else { "guests" }
                    }
                }
                button {
                    class: "stepper-btn",
                    r#type: "button",
                    "aria-label": "More guests",
                    disabled: count.at_max(),
                    onclick: increment,
                    "+"
                }
            }
        }
    }
}
