//! Config file loading

use std::io::Write;

use invitation_core::{InvitationConfig, RsvpError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn explicit_file_overrides_fields() {
    let file = write_config(
        r#"{
            "recipient": "15551234567",
            "event": { "honoree": "Sam", "party_title": "Sam's Graduation", "date": "2026-06-13" }
        }"#,
    );

    let config = InvitationConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.recipient, "15551234567");
    assert_eq!(config.event.honoree, "Sam");
    assert_eq!(config.event.date_display(), "Saturday, June 13th, 2026");
    // Untouched sections keep their defaults
    assert_eq!(config.messaging_base_url, "https://wa.me");
    assert_eq!(config.delays.submit_reset_ms, 3000);
}

#[test]
fn malformed_file_is_an_error() {
    let file = write_config("{ not json");
    let err = InvitationConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RsvpError::Json(_)));
}

#[test]
fn invalid_values_are_rejected() {
    let file = write_config(r#"{ "recipient": "+263779790287" }"#);
    let err = InvitationConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RsvpError::InvalidRecipient(_)));

    let file = write_config(r#"{ "event": { "party_title": "  " } }"#);
    let err = InvitationConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, RsvpError::Config(_)));
}

#[test]
fn missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = InvitationConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, RsvpError::Io(_)));
}
