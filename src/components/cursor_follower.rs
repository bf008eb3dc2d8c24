//! Cursor Follower Component
//!
//! Soft gradient dot trailing the pointer. Hidden on narrow screens by CSS.

use dioxus::prelude::*;
use invitation_core::landing::cursor_offset;

#[component]
pub fn CursorFollower(x: f64, y: f64) -> Element {
    let (left, top) = cursor_offset(x, y);

    rsx! {
        div {
            class: "cursor-follower",
            style: "transform: translate3d({left}px, {top}px, 0);",
        }
    }
}
