//! Plain-text RSVP message sent to the host.
//!
//! The host reads these messages by eye, so the line order and the
//! attending-only guest line are fixed.

use std::fmt::Write;

use super::form::RsvpForm;
use crate::config::EventDetails;

/// Shown in place of an empty (or whitespace-only) guest message
pub const NO_MESSAGE_PLACEHOLDER: &str = "No message provided";

/// Render the form into the outbound message.
///
/// Pure: identical inputs always produce identical output.
pub fn format_message(form: &RsvpForm, event: &EventDetails) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "🎉 *RSVP for {}* 🎂", event.party_title);
    out.push('\n');
    let _ = writeln!(out, "👤 *Name:* {}", form.name);
    let _ = writeln!(out, "📧 *Email:* {}", form.email);
    let _ = writeln!(out, "📱 *Phone:* {}", form.phone);
    out.push('\n');
    let _ = writeln!(out, "🎊 *Attendance:* {}", form.attendance.summary());
    if form.attendance.is_attending() {
        let _ = writeln!(out, "👥 Number of guests: {}", form.guests);
    }
    out.push('\n');

    let message = if form.message.trim().is_empty() {
        NO_MESSAGE_PLACEHOLDER
    } else {
        form.message.as_str()
    };
    let _ = writeln!(out, "💌 *Message:* {}", message);
    out.push('\n');
    out.push_str("---\n");
    let _ = write!(out, "Sent via {} 🎈", event.form_footer);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::{Attendance, GuestCount};

    fn jane() -> RsvpForm {
        RsvpForm {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1234".into(),
            attendance: Attendance::Yes,
            guests: GuestCount::new(3),
            message: String::new(),
        }
    }

    #[test]
    fn attending_layout_is_exact() {
        let text = format_message(&jane(), &EventDetails::default());
        let expected = "🎉 *RSVP for Mabel's 21st Birthday Party* 🎂\n\
                        \n\
                        👤 *Name:* Jane Doe\n\
                        📧 *Email:* jane@x.com\n\
                        📱 *Phone:* 555-1234\n\
                        \n\
                        🎊 *Attendance:* ✅ YES - I'll be there!\n\
                        👥 Number of guests: 3\n\
                        \n\
                        💌 *Message:* No message provided\n\
                        \n\
                        ---\n\
                        Sent via Mabel's Birthday RSVP Form 🎈";
        assert_eq!(text, expected);
    }

    #[test]
    fn declining_omits_guest_line() {
        let mut form = jane();
        form.attendance = Attendance::No;
        form.guests = GuestCount::new(5);
        let text = format_message(&form, &EventDetails::default());

        assert!(!text.contains("Number of guests"));
        assert!(text.contains("🎊 *Attendance:* ❌ Sorry, can't make it\n\n💌"));
        assert!(text.contains("📱 *Phone:* 555-1234\n\n🎊"));
        assert!(text.ends_with("No message provided\n\n---\nSent via Mabel's Birthday RSVP Form 🎈"));
    }

    #[test]
    fn whitespace_message_uses_placeholder() {
        let mut form = jane();
        form.message = "  \n ".into();
        let text = format_message(&form, &EventDetails::default());
        assert!(text.contains("💌 *Message:* No message provided"));

        form.message = "Happy birthday!".into();
        let text = format_message(&form, &EventDetails::default());
        assert!(text.contains("💌 *Message:* Happy birthday!"));
        assert!(!text.contains(NO_MESSAGE_PLACEHOLDER));
    }
}
