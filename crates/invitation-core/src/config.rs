//! Invitation configuration.
//!
//! Event copy, messaging recipient and animation delays. Defaults reproduce
//! the built-in invitation; a JSON file can override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RsvpError, RsvpResult};
use crate::outbound::validate_recipient;

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "invitation.json";

/// Text and facts shown on the landing page and in the RSVP message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    /// Short name used in copy ("Mabel")
    pub honoree: String,
    pub honoree_full_name: String,
    /// Hero heading
    pub headline: String,
    /// Small badge above the heading
    pub badge: String,
    /// Title line of the RSVP message
    pub party_title: String,
    /// "Sent via ..." footer of the RSVP message
    pub form_footer: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    /// "Let's make it magical" list
    pub highlights: Vec<String>,
    /// "Important notes" list
    pub notes: Vec<String>,
    pub cta_title: String,
    pub cta_body: String,
}

impl EventDetails {
    /// Long-form date, e.g. "Saturday, August 30th, 2025"
    pub fn date_display(&self) -> String {
        let day = self.date.day();
        format!(
            "{}, {} {}{}, {}",
            self.date.format("%A"),
            self.date.format("%B"),
            day,
            ordinal_suffix(day),
            self.date.year()
        )
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            honoree: "Mabel".to_string(),
            honoree_full_name: "Mabel Tadakadzwa Makwanise".to_string(),
            headline: "Mabel's 21st Birthday!".to_string(),
            badge: "Surprise Party Alert!".to_string(),
            party_title: "Mabel's 21st Birthday Party".to_string(),
            form_footer: "Mabel's Birthday RSVP Form".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 30).unwrap_or_default(),
            time: "12:00 PM - 8:00 PM".to_string(),
            location: "9 New March, Hillside".to_string(),
            highlights: vec![
                "Delicious birthday cake & treats".to_string(),
                "Music, dancing & great vibes".to_string(),
                "Surprise guests & friends".to_string(),
                "Photo booth & memories".to_string(),
            ],
            notes: vec![
                "This is a SURPRISE party - keep it secret!".to_string(),
                "Color theme: Orange & Peach".to_string(),
                "Please arrive by 11:45 AM".to_string(),
                "Your presence is the perfect gift!".to_string(),
            ],
            cta_title: "Ready to Celebrate?".to_string(),
            cta_body: "Let's toast to 21 amazing years of Mabel! Your presence will make her day \
                       absolutely perfect and create memories that will last a lifetime."
                .to_string(),
        }
    }
}

/// One-shot delays for transient visual state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delays {
    /// How long the confetti overlay stays up after an RSVP call-to-action
    pub confetti_ms: u64,
    /// How long the thank-you screen shows before the wizard resets
    pub submit_reset_ms: u64,
}

impl Delays {
    pub fn confetti(&self) -> Duration {
        Duration::from_millis(self.confetti_ms)
    }

    pub fn submit_reset(&self) -> Duration {
        Duration::from_millis(self.submit_reset_ms)
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            confetti_ms: 4000,
            submit_reset_ms: 3000,
        }
    }
}

/// Complete invitation configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    pub event: EventDetails,
    pub delays: Delays,
    /// Messaging service link prefix
    pub messaging_base_url: String,
    /// Host's number in international format, digits only
    pub recipient: String,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            event: EventDetails::default(),
            delays: Delays::default(),
            messaging_base_url: "https://wa.me".to_string(),
            recipient: "263779790287".to_string(),
        }
    }
}

impl InvitationConfig {
    /// Platform default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("invitation").join(CONFIG_FILE_NAME))
    }

    /// Read and validate a config file
    pub fn load(path: &Path) -> RsvpResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        info!("Loaded invitation config from {:?}", path);
        Ok(config)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load_or_default(explicit: Option<&Path>) -> RsvpResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No invitation config file, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> RsvpResult<()> {
        validate_recipient(&self.recipient)?;
        if self.event.party_title.trim().is_empty() {
            return Err(RsvpError::Config("party_title must not be empty".to_string()));
        }
        if !self.messaging_base_url.starts_with("https://")
            && !self.messaging_base_url.starts_with("http://")
        {
            return Err(RsvpError::Config(format!(
                "messaging_base_url must be an http(s) URL: {}",
                self.messaging_base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_date_display() {
        assert_eq!(
            EventDetails::default().date_display(),
            "Saturday, August 30th, 2025"
        );
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(30), "th");
    }

    #[test]
    fn defaults_validate() {
        assert!(InvitationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_recipient_and_base() {
        let mut config = InvitationConfig::default();
        config.recipient = "+263779790287".to_string();
        assert!(matches!(config.validate(), Err(RsvpError::InvalidRecipient(_))));

        let mut config = InvitationConfig::default();
        config.messaging_base_url = "wa.me".to_string();
        assert!(matches!(config.validate(), Err(RsvpError::Config(_))));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: InvitationConfig =
            serde_json::from_str(r#"{ "delays": { "confetti_ms": 1000 } }"#).unwrap();
        assert_eq!(config.delays.confetti(), Duration::from_secs(1));
        assert_eq!(config.delays.submit_reset(), Duration::from_secs(3));
        assert_eq!(config.event, EventDetails::default());
    }
}
