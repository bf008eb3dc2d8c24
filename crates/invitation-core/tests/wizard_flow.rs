//! End-to-end RSVP scenarios
//!
//! Drives the wizard from an empty form to a dispatched link, using a
//! recording launcher in place of a real browser.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use invitation_core::{
    Attendance, InvitationConfig, LaunchError, LaunchOutcome, LinkLauncher, Phase, RsvpError,
    Step, TimerSlot, Wizard,
};

#[derive(Default)]
struct FakeBrowser {
    popups_blocked: bool,
    fail_everything: bool,
    opened: RefCell<Vec<String>>,
    redirected: RefCell<Vec<String>>,
}

impl LinkLauncher for FakeBrowser {
    fn open_new_context(&self, url: &str) -> Result<(), LaunchError> {
        if self.popups_blocked || self.fail_everything {
            return Err(LaunchError::Blocked("window.open returned null".into()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn redirect_current(&self, url: &str) -> Result<(), LaunchError> {
        if self.fail_everything {
            return Err(LaunchError::Redirect("navigation cancelled".into()));
        }
        self.redirected.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Fill the form the way a guest would, step by step
fn walk_to_message_step(wizard: &mut Wizard, attendance: Attendance, guests: u8) {
    let form = wizard.form_mut();
    form.name = "Jane Doe".into();
    form.email = "jane@x.com".into();
    form.phone = "555-1234".into();
    wizard.next().expect("identity complete");

    wizard.form_mut().attendance = attendance;
    for _ in 1..guests {
        wizard.form_mut().guests.increment();
    }
    wizard.next().expect("attendance chosen");
    assert_eq!(wizard.step(), Step::Message);
}

#[test]
fn attending_guest_produces_full_message() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser::default();
    let mut wizard = Wizard::new();

    walk_to_message_step(&mut wizard, Attendance::Yes, 3);
    let submission = wizard.submit(&config, &browser).unwrap();

    let text = &submission.message;
    let order = [
        "🎉 *RSVP for Mabel's 21st Birthday Party* 🎂",
        "👤 *Name:* Jane Doe",
        "📧 *Email:* jane@x.com",
        "📱 *Phone:* 555-1234",
        "🎊 *Attendance:* ✅ YES - I'll be there!",
        "👥 Number of guests: 3",
        "💌 *Message:* No message provided",
        "Sent via Mabel's Birthday RSVP Form 🎈",
    ];
    let mut cursor = 0;
    for line in order {
        let at = text[cursor..]
            .find(line)
            .unwrap_or_else(|| panic!("missing or out of order: {line}"));
        cursor += at + line.len();
    }

    assert_eq!(submission.outcome, LaunchOutcome::Opened);
    assert_eq!(wizard.phase(), Phase::Submitted);
    assert!(!wizard.is_submitting());

    let opened = browser.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("https://wa.me/263779790287?text="));
    assert_eq!(opened[0], submission.link.as_str());
}

#[test]
fn declining_guest_omits_guest_line() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser::default();
    let mut wizard = Wizard::new();

    walk_to_message_step(&mut wizard, Attendance::No, 4);
    assert_eq!(wizard.form().guests.get(), 4);

    let submission = wizard.submit(&config, &browser).unwrap();
    assert!(!submission.message.contains("Number of guests"));
    assert!(submission.message.contains("❌ Sorry, can't make it"));
}

#[test]
fn blocked_popup_redirects_current_context() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser {
        popups_blocked: true,
        ..Default::default()
    };
    let mut wizard = Wizard::new();

    walk_to_message_step(&mut wizard, Attendance::Yes, 1);
    let submission = wizard.submit(&config, &browser).unwrap();

    assert_eq!(submission.outcome, LaunchOutcome::Redirected);
    assert!(browser.opened.borrow().is_empty());
    assert_eq!(browser.redirected.borrow().len(), 1);
    assert!(wizard.is_submitted());
}

#[test]
fn failed_launch_clears_submitting_without_retry() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser {
        fail_everything: true,
        ..Default::default()
    };
    let mut wizard = Wizard::new();

    walk_to_message_step(&mut wizard, Attendance::Yes, 2);
    let err = wizard.submit(&config, &browser).unwrap_err();

    assert!(matches!(err, RsvpError::Launch(_)));
    assert!(!wizard.is_submitting());
    assert!(!wizard.is_submitted());
    assert_eq!(wizard.phase(), Phase::Editing(Step::Message));
    // Form data survives so the guest can try again by hand
    assert_eq!(wizard.form().name, "Jane Doe");
}

#[test]
fn bad_recipient_is_reported() {
    let config = InvitationConfig {
        recipient: "+263 77".to_string(),
        ..Default::default()
    };
    let browser = FakeBrowser::default();
    let mut wizard = Wizard::new();

    walk_to_message_step(&mut wizard, Attendance::No, 1);
    let err = wizard.submit(&config, &browser).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidRecipient(_)));
    assert!(browser.opened.borrow().is_empty());
}

#[test]
fn submit_rejected_before_last_step_and_after_success() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser::default();
    let mut wizard = Wizard::new();

    let err = wizard.submit(&config, &browser).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidState(_)));

    walk_to_message_step(&mut wizard, Attendance::Yes, 1);
    wizard.submit(&config, &browser).unwrap();
    let err = wizard.submit(&config, &browser).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidState(_)));
    assert_eq!(browser.opened.borrow().len(), 1);
}

#[test]
fn back_navigation_keeps_entered_data() {
    let mut wizard = Wizard::new();
    walk_to_message_step(&mut wizard, Attendance::Yes, 2);

    assert_eq!(wizard.previous(), Step::Attendance);
    assert_eq!(wizard.previous(), Step::Identity);
    assert_eq!(wizard.previous(), Step::Identity);
    assert_eq!(wizard.form().guests.get(), 2);
    assert_eq!(wizard.progress(), [true, false, false]);
}

#[tokio::test(start_paused = true)]
async fn wizard_resets_after_post_submit_delay() {
    let config = InvitationConfig::default();
    let browser = FakeBrowser::default();
    let wizard = Arc::new(Mutex::new(Wizard::new()));
    let slot = Arc::new(Mutex::new(TimerSlot::new()));

    {
        let mut w = wizard.lock().unwrap();
        walk_to_message_step(&mut w, Attendance::Yes, 5);
        w.submit(&config, &browser).unwrap();
    }

    let ticket = slot.lock().unwrap().arm();
    let reset = {
        let wizard = wizard.clone();
        let slot = slot.clone();
        let delay = config.delays.submit_reset();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if slot.lock().unwrap().fire(ticket) {
                wizard.lock().unwrap().reset();
            }
        })
    };

    tokio::time::sleep(Duration::from_millis(2999)).await;
    assert!(wizard.lock().unwrap().is_submitted());

    reset.await.unwrap();
    let w = wizard.lock().unwrap();
    assert_eq!(*w, Wizard::new());
    assert_eq!(w.step(), Step::Identity);
    assert_eq!(w.form().attendance, Attendance::Unset);
    assert_eq!(w.form().guests.get(), 1);
}
