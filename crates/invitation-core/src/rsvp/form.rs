//! Session-scoped RSVP form data.

use serde::{Deserialize, Serialize};

/// Whether the guest is coming
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    /// No choice made yet
    #[default]
    Unset,
    /// Attending
    Yes,
    /// Not attending
    No,
}

impl Attendance {
    pub fn is_set(&self) -> bool {
        !matches!(self, Attendance::Unset)
    }

    pub fn is_attending(&self) -> bool {
        matches!(self, Attendance::Yes)
    }

    /// Human-readable status used in the outbound message
    pub fn summary(&self) -> &'static str {
        match self {
            Attendance::Yes => "✅ YES - I'll be there!",
            // An unset choice never reaches the message; it reads as a decline
            Attendance::No | Attendance::Unset => "❌ Sorry, can't make it",
        }
    }
}

/// Party size for an attending guest, always within `MIN..=MAX`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a guest count, clamping into range
    pub fn new(count: u8) -> Self {
        Self(count.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Add one guest; no-op at the maximum
    pub fn increment(&mut self) {
        if self.0 < Self::MAX {
            self.0 += 1;
        }
    }

    /// Remove one guest; no-op at the minimum
    pub fn decrement(&mut self) {
        if self.0 > Self::MIN {
            self.0 -= 1;
        }
    }

    pub fn at_min(&self) -> bool {
        self.0 == Self::MIN
    }

    pub fn at_max(&self) -> bool {
        self.0 == Self::MAX
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "guest count {} outside {}..={}",
                value,
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<GuestCount> for u8 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for GuestCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text fields editable from the wizard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// Everything the guest enters across the three wizard steps
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attendance: Attendance,
    pub guests: GuestCount,
    /// Optional free text; empty means "no message"
    pub message: String,
}

impl RsvpForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name, email and phone are all non-empty after trimming
    pub fn identity_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
