//! Input Field Components
//!
//! Labelled text inputs and textareas for the RSVP form.
//! Features:
//! - Emoji icon in front of the label
//! - Coloured border that deepens on focus
//! - 48px minimum height for touch targets

use dioxus::prelude::*;

/// Accent colour of a field's border and icon
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Accent {
    #[default]
    Orange,
    Pink,
    Purple,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Orange => "accent-orange",
            Accent::Pink => "accent-pink",
            Accent::Purple => "accent-purple",
        }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Label text
    pub label: String,
    /// Glyph shown before the label
    #[props(default)]
    pub icon: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub accent: Accent,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Entrance animation delay in seconds
    #[props(default = 0.0)]
    pub delay_s: f64,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         label: "Full Name".to_string(),
///         icon: "👤".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         placeholder: "Your beautiful name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let accent = props.accent.class();

    rsx! {
        div {
            class: "form-field rise-in",
            style: "animation-delay: {props.delay_s}s;",
            label {
                class: "input-label",
                r#for: "{props.id}",
                if let Some(icon) = &props.icon {
                    span { class: "input-icon {accent}", "{icon}" }
                }
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "input-field {accent}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    pub label: String,
    #[props(default)]
    pub icon: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub accent: Accent,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let accent = props.accent.class();

    rsx! {
        div { class: "form-field rise-in",
            label {
                class: "input-label",
                r#for: "{props.id}",
                if let Some(icon) = &props.icon {
                    span { class: "input-icon {accent}", "{icon}" }
                }
                "{props.label}"
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea {accent}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_classes() {
        assert_eq!(Accent::default(), Accent::Orange);
        assert_eq!(Accent::Pink.class(), "accent-pink");
        assert_eq!(Accent::Purple.class(), "accent-purple");
    }
}
