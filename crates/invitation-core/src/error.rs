//! Error types for the invitation

use thiserror::Error;

use crate::rsvp::Step;

/// Failure reported by a [`LinkLauncher`](crate::outbound::LinkLauncher)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// The environment refused to open a new browsing context
    #[error("new context blocked: {0}")]
    Blocked(String),

    /// Navigating the current context failed
    #[error("redirect failed: {0}")]
    Redirect(String),
}

/// Main error type for invitation operations
#[derive(Error, Debug)]
pub enum RsvpError {
    /// The current step's guard is not satisfied
    #[error("Step incomplete: {0}")]
    StepIncomplete(Step),

    /// Operation not allowed in the wizard's current phase
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Recipient id is not an international number without '+'
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    /// Both the new-context open and the redirect fallback failed
    #[error("Launch failed: {0}")]
    Launch(#[from] LaunchError),

    /// Configuration is present but unusable
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RsvpError
pub type RsvpResult<T> = Result<T, RsvpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RsvpError::StepIncomplete(Step::Identity);
        assert_eq!(format!("{}", err), "Step incomplete: identity");

        let err = RsvpError::InvalidRecipient("+263".to_string());
        assert_eq!(format!("{}", err), "Invalid recipient: +263");
    }

    #[test]
    fn test_error_from_launch() {
        let err: RsvpError = LaunchError::Redirect("no webview".into()).into();
        assert!(matches!(err, RsvpError::Launch(LaunchError::Redirect(_))));
        assert_eq!(err.to_string(), "Launch failed: redirect failed: no webview");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RsvpError = io_err.into();
        assert!(matches!(err, RsvpError::Io(_)));
    }
}
