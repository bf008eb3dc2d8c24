//! Outbound messaging link.
//!
//! A submitted RSVP leaves the app as a pre-filled chat link:
//!
//! ```text
//! https://wa.me/<recipient>?text=<percent-encoded message>
//! ```
//!
//! Nothing is read back. The link is opened in a new browsing context and,
//! if that is refused, the current context is redirected instead.

use std::fmt;

use tracing::{info, warn};

use crate::error::{LaunchError, RsvpError, RsvpResult};

/// A fully built, percent-encoded messaging link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    url: String,
}

impl OutboundLink {
    /// Build a link to `recipient` carrying `text`.
    ///
    /// The recipient must be an international number without a leading '+'.
    pub fn new(base_url: &str, recipient: &str, text: &str) -> RsvpResult<Self> {
        validate_recipient(recipient)?;
        let base = base_url.trim_end_matches('/');
        let url = format!("{}/{}?text={}", base, recipient, urlencoding::encode(text));
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for OutboundLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Check that a recipient id is digits only
pub fn validate_recipient(recipient: &str) -> RsvpResult<()> {
    if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
        return Err(RsvpError::InvalidRecipient(recipient.to_string()));
    }
    Ok(())
}

/// How a link ended up being shown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LaunchOutcome {
    /// Opened in a new browsing context
    Opened,
    /// New context was refused; the current context navigated instead
    Redirected,
}

/// Something that can show a URL to the user
pub trait LinkLauncher {
    /// Open `url` in a new browsing context (tab, window or external app)
    fn open_new_context(&self, url: &str) -> Result<(), LaunchError>;

    /// Navigate the current context to `url`
    fn redirect_current(&self, url: &str) -> Result<(), LaunchError>;
}

/// Open the link, falling back to a redirect when a new context is refused
pub fn dispatch(launcher: &dyn LinkLauncher, link: &OutboundLink) -> RsvpResult<LaunchOutcome> {
    match launcher.open_new_context(link.as_str()) {
        Ok(()) => {
            info!("Opened messaging link in new context");
            Ok(LaunchOutcome::Opened)
        }
        Err(e) => {
            warn!("New context refused ({}), redirecting current context", e);
            launcher.redirect_current(link.as_str())?;
            Ok(LaunchOutcome::Redirected)
        }
    }
}

/// Launcher backed by the operating system's default browser.
///
/// There is no "current context" to redirect outside a browser, so the
/// fallback always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemBrowser;

impl LinkLauncher for SystemBrowser {
    fn open_new_context(&self, url: &str) -> Result<(), LaunchError> {
        webbrowser::open(url).map_err(|e| LaunchError::Blocked(e.to_string()))
    }

    fn redirect_current(&self, _url: &str) -> Result<(), LaunchError> {
        Err(LaunchError::Redirect(
            "system browser has no current context".to_string(),
        ))
    }
}
