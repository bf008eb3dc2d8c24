//! RSVP wizard: form model, step state machine and message formatting.
//!
//! The wizard walks a guest through three steps:
//!
//! ```text
//! Identity ──(name, email, phone)──▶ Attendance ──(yes/no)──▶ Message ──submit──▶ Submitted
//!     ◀──────────── previous ─────────────  ◀──────── previous ──────
//! ```
//!
//! On submit the form is rendered into a plain-text message and handed to
//! the outbound messaging link. See [`format_message`] for the exact layout.

mod form;
mod message;
mod wizard;

pub use form::{Attendance, Field, GuestCount, RsvpForm};
pub use message::{format_message, NO_MESSAGE_PLACEHOLDER};
pub use wizard::{Phase, Step, Submission, Wizard};
