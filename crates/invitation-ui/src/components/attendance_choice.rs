//! Yes/no attendance picker

use dioxus::prelude::*;
use invitation_core::Attendance;

/// Copy for one attendance option
struct ChoiceCopy {
    value: Attendance,
    emoji: &'static str,
    title: &'static str,
    detail: &'static str,
}

const CHOICES: [ChoiceCopy; 2] = [
    ChoiceCopy {
        value: Attendance::Yes,
        emoji: "🎉",
        title: "Yes, I'll be there!",
        detail: "Count me in for the celebration",
    },
    ChoiceCopy {
        value: Attendance::No,
        emoji: "😢",
        title: "Sorry, I can't make it",
        detail: "I'll be there in spirit",
    },
];

/// Properties for the AttendanceChoice component
#[derive(Clone, PartialEq, Props)]
pub struct AttendanceChoiceProps {
    pub selected: Attendance,
    pub on_select: EventHandler<Attendance>,
}

/// Two large radio cards; the selected one is highlighted
#[component]
pub fn AttendanceChoice(props: AttendanceChoiceProps) -> Element {
    rsx! {
        div { class: "attendance-choice", role: "radiogroup",
            for choice in CHOICES.iter() {
                {
                    let value = choice.value;
                    let selected = props.selected == value;
                    let on_select = props.on_select;
                    rsx! {
                        label {
                            key: "{choice.title}",
                            class: if selected { "attendance-card selected" } else { "attendance-card" },
                            input {
                                r#type: "radio",
                                name: "attendance",
                                checked: selected,
                                onchange: move |_| on_select.call(value),
                            }
                            span { class: "attendance-emoji", "{choice.emoji}" }
                            span { class: "attendance-text",
                                strong { "{choice.title}" }
                                small { "{choice.detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
