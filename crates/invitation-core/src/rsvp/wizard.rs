//! Three-step RSVP state machine.

use std::fmt;

use tracing::{debug, error, info};

use super::form::RsvpForm;
use super::message::format_message;
use crate::config::InvitationConfig;
use crate::error::{RsvpError, RsvpResult};
use crate::outbound::{dispatch, LaunchOutcome, LinkLauncher, OutboundLink};

/// A wizard step, in order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub enum Step {
    /// Name, email and phone
    #[default]
    Identity,
    /// Yes/no and party size
    Attendance,
    /// Optional free-text message
    Message,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Identity, Step::Attendance, Step::Message];

    pub fn index(&self) -> usize {
        match self {
            Step::Identity => 0,
            Step::Attendance => 1,
            Step::Message => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "Let's get to know you!",
            Step::Attendance => "Will you be joining us?",
            Step::Message => "Leave a special message",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Step::Identity => "Tell us who you are",
            Step::Attendance => "Let us know if you can make it",
            Step::Message => "Share your wishes for the birthday star",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Identity => "identity",
            Step::Attendance => "attendance",
            Step::Message => "message",
        };
        f.write_str(name)
    }
}

/// Where the wizard is in its lifecycle
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Editing(Step),
    Submitting,
    Submitted,
}

/// Result of a successful submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// The formatted message body
    pub message: String,
    /// The link that was handed to the launcher
    pub link: OutboundLink,
    /// Whether the link opened in a new context or replaced the current one
    pub outcome: LaunchOutcome,
}

/// RSVP wizard state, owned by a single modal instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    form: RsvpForm,
    step: Step,
    submitting: bool,
    submitted: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RsvpForm {
        &mut self.form
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> Phase {
        if self.submitted {
            Phase::Submitted
        } else if self.submitting {
            Phase::Submitting
        } else {
            Phase::Editing(self.step)
        }
    }

    /// Guard for leaving the current step
    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::Identity => self.form.identity_complete(),
            Step::Attendance => self.form.attendance.is_set(),
            Step::Message => true,
        }
    }

    /// Advance one step if the current guard allows it.
    ///
    /// At the last step this is a no-op returning the current step;
    /// submission is a separate action.
    pub fn next(&mut self) -> RsvpResult<Step> {
        if !self.can_proceed() {
            return Err(RsvpError::StepIncomplete(self.step));
        }
        if let Some(next) = self.step.next() {
            debug!(from = %self.step, to = %next, "RSVP step forward");
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step; no-op on the first step
    pub fn previous(&mut self) -> Step {
        if let Some(prev) = self.step.previous() {
            debug!(from = %self.step, to = %prev, "RSVP step back");
            self.step = prev;
        }
        self.step
    }

    /// Lit state of the progress dots, one per step
    pub fn progress(&self) -> [bool; 3] {
        Step::ALL.map(|step| step <= self.step)
    }

    /// Format the form, build the outbound link and open it.
    ///
    /// Must be called synchronously from the user's submit action so the
    /// environment does not treat the new context as an unsolicited popup.
    /// On failure the submitting flag is cleared and nothing is retried.
    pub fn submit(
        &mut self,
        config: &InvitationConfig,
        launcher: &dyn LinkLauncher,
    ) -> RsvpResult<Submission> {
        if self.submitting || self.submitted {
            return Err(RsvpError::InvalidState(
                "submission already in progress".to_string(),
            ));
        }
        if self.step != Step::Message {
            return Err(RsvpError::InvalidState(format!(
                "cannot submit from the {} step",
                self.step
            )));
        }

        self.submitting = true;
        let result = self.send(config, launcher);
        self.submitting = false;

        match result {
            Ok(submission) => {
                info!(
                    attending = self.form.attendance.is_attending(),
                    outcome = ?submission.outcome,
                    "RSVP sent"
                );
                self.submitted = true;
                Ok(submission)
            }
            Err(e) => {
                error!("Error sending RSVP: {}", e);
                Err(e)
            }
        }
    }

    fn send(
        &self,
        config: &InvitationConfig,
        launcher: &dyn LinkLauncher,
    ) -> RsvpResult<Submission> {
        let message = format_message(&self.form, &config.event);
        let link = OutboundLink::new(&config.messaging_base_url, &config.recipient, &message)?;
        let outcome = dispatch(launcher, &link)?;
        Ok(Submission {
            message,
            link,
            outcome,
        })
    }

    /// Return to the initial step with an empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::Attendance;

    #[test]
    fn step_ordering_and_indices() {
        assert_eq!(Step::Identity.next(), Some(Step::Attendance));
        assert_eq!(Step::Message.next(), None);
        assert_eq!(Step::Identity.previous(), None);
        assert_eq!(Step::from_index(2), Some(Step::Message));
        assert_eq!(Step::from_index(3), None);
        assert!(Step::Message.is_last());
    }

    #[test]
    fn identity_guard_blocks_advance() {
        let mut wizard = Wizard::new();
        wizard.form_mut().name = "Jane".into();
        let err = wizard.next().unwrap_err();
        assert!(matches!(err, RsvpError::StepIncomplete(Step::Identity)));
        assert_eq!(wizard.step(), Step::Identity);
    }

    #[test]
    fn attendance_guard_needs_choice() {
        let mut wizard = Wizard::new();
        wizard.form_mut().name = "Jane".into();
        wizard.form_mut().email = "jane@x.com".into();
        wizard.form_mut().phone = "555".into();
        assert_eq!(wizard.next().unwrap(), Step::Attendance);
        assert!(!wizard.can_proceed());

        wizard.form_mut().attendance = Attendance::No;
        assert!(wizard.can_proceed());
        assert_eq!(wizard.next().unwrap(), Step::Message);
        // Last step: advancing is a no-op
        assert_eq!(wizard.next().unwrap(), Step::Message);
    }

    #[test]
    fn previous_is_noop_on_first_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.previous(), Step::Identity);
        assert_eq!(wizard.progress(), [true, false, false]);
    }

    #[test]
    fn phase_reflects_flags() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.phase(), Phase::Editing(Step::Identity));
        wizard.submitted = true;
        assert_eq!(wizard.phase(), Phase::Submitted);
        wizard.reset();
        assert_eq!(wizard, Wizard::new());
    }
}
