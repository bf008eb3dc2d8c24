//! RSVP Modal Component
//!
//! Three-step RSVP wizard in a dialog. The wizard state lives in a core
//! [`Wizard`]; this component only renders it and forwards input.

use dioxus::prelude::*;
use invitation_core::{Attendance, Field, Step, Wizard};
use invitation_ui::{
    Accent, AttendanceChoice, Button, ButtonVariant, CloseButton, GuestStepper, Input,
    StepProgress, TextArea,
};

use crate::context::use_config;
use crate::launcher::WebviewLauncher;
use crate::timers::use_one_shot;

/// RSVP Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RsvpModal {
///         show: show_rsvp(),
///         on_close: move |_| show_rsvp.set(false),
///     }
/// }
/// ```
#[component]
pub fn RsvpModal(
    /// Whether to show the modal
    show: bool,
    /// Callback when the modal should close
    on_close: EventHandler<()>,
) -> Element {
    let config = use_config();
    let mut wizard = use_signal(Wizard::new);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut reset_timer = use_one_shot();

    // Dismissal discards the form and any pending reset
    let mut dismiss = move || {
        reset_timer.cancel();
        wizard.write().reset();
        notice.set(None);
        on_close.call(());
    };

    let submit_config = config.clone();
    let submit = move |_| {
        notice.set(None);
        let result = wizard.write().submit(&submit_config, &WebviewLauncher);
        match result {
            Ok(_) => {
                reset_timer.schedule(submit_config.delays.submit_reset(), move || {
                    wizard.write().reset();
                    on_close.call(());
                });
            }
            Err(e) => {
                tracing::error!("RSVP submission failed: {}", e);
                notice.set(Some(
                    "We couldn't open the messaging app. Please try again.".to_string(),
                ));
            }
        }
    };

    if !show {
        return rsx! {};
    }

    let honoree = config.event.honoree.clone();
    let state = wizard();

    if state.is_submitted() {
        return rsx! {
            div {
                class: "modal-overlay",
                onclick: move |_| dismiss(),
                div {
                    class: "rsvp-modal success",
                    onclick: move |e| e.stop_propagation(),
                    div { class: "success-badge", "✔" }
                    h3 { class: "success-title", "🎉 Thank You!" }
                    p { class: "success-text",
                        "Your RSVP has been sent via WhatsApp! We can't wait to celebrate "
                        "{honoree}'s special day with you. Get ready for an amazing party! 🎂✨"
                    }
                    div { class: "success-stars",
                        for i in 0..5 {
                            span {
                                key: "{i}",
                                class: "success-star",
                                style: "animation-delay: {i}00ms;",
                                "⭐"
                            }
                        }
                    }
                }
            }
        };
    }

    let step = state.step();
    let form = state.form().clone();
    let can_proceed = state.can_proceed();
    let submitting = state.is_submitting();
    let step_title = step.title();
    let step_subtitle = step.subtitle();
    let headline = config.event.headline.clone();

    let step_body = match step {
        Step::Identity => rsx! {
            Input {
                id: "name".to_string(),
                label: "Full Name".to_string(),
                icon: "👤".to_string(),
                value: form.name.clone(),
                oninput: move |v: String| wizard.write().form_mut().set_field(Field::Name, v),
                placeholder: "Your beautiful name".to_string(),
                accent: Accent::Orange,
                required: true,
                delay_s: 0.1,
            }
            Input {
                id: "email".to_string(),
                label: "Email Address".to_string(),
                icon: "📧".to_string(),
                input_type: "email".to_string(),
                value: form.email.clone(),
                oninput: move |v: String| wizard.write().form_mut().set_field(Field::Email, v),
                placeholder: "your.email@example.com".to_string(),
                accent: Accent::Pink,
                required: true,
                delay_s: 0.2,
            }
            Input {
                id: "phone".to_string(),
                label: "Phone Number".to_string(),
                icon: "📱".to_string(),
                input_type: "tel".to_string(),
                value: form.phone.clone(),
                oninput: move |v: String| wizard.write().form_mut().set_field(Field::Phone, v),
                placeholder: "(555) 123-4567".to_string(),
                accent: Accent::Purple,
                required: true,
                delay_s: 0.3,
            }
        },
        Step::Attendance => rsx! {
            AttendanceChoice {
                selected: form.attendance,
                on_select: move |choice: Attendance| wizard.write().form_mut().attendance = choice,
            }
            if form.attendance.is_attending() {
                GuestStepper {
                    count: form.guests,
                    on_change: move |count| wizard.write().form_mut().guests = count,
                }
            }
        },
        Step::Message => rsx! {
            TextArea {
                id: "message".to_string(),
                label: "Birthday Message (Optional)".to_string(),
                icon: "💌".to_string(),
                value: form.message.clone(),
                oninput: move |v: String| wizard.write().form_mut().set_field(Field::Message, v),
                placeholder: format!(
                    "Share a birthday wish, memory, or just let {} know how excited you are to celebrate with her...",
                    honoree
                ),
                rows: 4,
                accent: Accent::Pink,
            }
            p { class: "message-hint",
                "Your presence is the greatest gift, but your words will make her day even more special! 💝"
            }
        },
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| dismiss(),

            div {
                class: "rsvp-modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "rsvp-header",
                    div { class: "rsvp-header-dots" }
                    CloseButton { onclick: move |_| dismiss() }
                    div { class: "rsvp-title-row",
                        span { class: "spin-slow", "🎊" }
                        h2 { class: "modal-title", "RSVP for {headline}" }
                    }
                    p { class: "modal-description",
                        "Join us for an unforgettable celebration filled with joy, laughter, and magical moments"
                    }
                    StepProgress { lit: state.progress() }
                }

                div { class: "rsvp-body",
                    div {
                        key: "{step}",
                        class: "rsvp-step slide-in",
                        div { class: "step-heading",
                            h3 { "{step_title}" }
                            p { "{step_subtitle}" }
                        }
                        {step_body}
                    }

                    if let Some(message) = notice() {
                        p { class: "error-text", "⚠ {message}" }
                    }

                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: step == Step::Identity,
                            onclick: move |_| {
                                wizard.write().previous();
                            },
                            "Previous"
                        }

                        if step.is_last() {
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: submitting,
                                onclick: submit,
                                if submitting { "Sending..." } else { "Send RSVP 🚀" }
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: !can_proceed,
                                onclick: move |_| {
                                    if let Err(e) = wizard.write().next() {
                                        tracing::debug!("Blocked: {}", e);
                                    }
                                },
                                "Next Step"
                            }
                        }
                    }
                }
            }
        }
    }
}
