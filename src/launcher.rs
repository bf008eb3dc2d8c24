//! Link launcher for the desktop webview.
//!
//! New contexts go to the system browser (or the messaging app registered
//! for the link). The fallback navigates the app's own webview.

use invitation_core::{LaunchError, LinkLauncher, SystemBrowser};

#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewLauncher;

impl LinkLauncher for WebviewLauncher {
    fn open_new_context(&self, url: &str) -> Result<(), LaunchError> {
        SystemBrowser.open_new_context(url)
    }

    fn redirect_current(&self, url: &str) -> Result<(), LaunchError> {
        let quoted =
            serde_json::to_string(url).map_err(|e| LaunchError::Redirect(e.to_string()))?;
        // Fire-and-forget; the webview navigates once the script runs
        let _ = dioxus::document::eval(&format!("window.location.href = {};", quoted));
        Ok(())
    }
}
