//! Invitation Core Library
//!
//! Framework-agnostic logic behind the animated party invitation.
//!
//! ## Overview
//!
//! The invitation is a single landing page with an RSVP wizard. Everything
//! that makes a decision lives here so the Dioxus views only render state:
//!
//! - **RSVP wizard**: three guarded steps, then a formatted message sent
//!   through an outbound messaging link
//! - **Timers**: cancelable one-shot slots for confetti and post-submit reset
//! - **Landing**: once-only reveal tracking, hero parallax, cursor follower
//! - **Confetti**: randomized particle layout
//!
//! ## Quick Start
//!
//! ```ignore
//! use invitation_core::{InvitationConfig, SystemBrowser, Wizard};
//!
//! let config = InvitationConfig::default();
//! let mut wizard = Wizard::new();
//!
//! wizard.form_mut().name = "Jane Doe".into();
//! wizard.form_mut().email = "jane@x.com".into();
//! wizard.form_mut().phone = "555-1234".into();
//! wizard.next()?;
//!
//! wizard.form_mut().attendance = invitation_core::Attendance::Yes;
//! wizard.next()?;
//!
//! let submission = wizard.submit(&config, &SystemBrowser)?;
//! println!("sent via {:?}", submission.outcome);
//! ```

pub mod config;
pub mod confetti;
pub mod error;
pub mod landing;
pub mod outbound;
pub mod rsvp;
pub mod timer;

// Re-exports
pub use config::{Delays, EventDetails, InvitationConfig};
pub use confetti::{ConfettiPiece, FloatingEmoji, Shape};
pub use error::{LaunchError, RsvpError, RsvpResult};
pub use landing::{RevealTracker, Section};
pub use outbound::{dispatch, LaunchOutcome, LinkLauncher, OutboundLink, SystemBrowser};
pub use rsvp::{format_message, Attendance, Field, GuestCount, Phase, RsvpForm, Step, Submission, Wizard};
pub use timer::{Ticket, TimerSlot};
