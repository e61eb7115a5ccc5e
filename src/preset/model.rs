//! Preset record structures as persisted on disk

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::timer::{clock_text, offset_from_hms};

/// An hours/minutes/seconds triple.
///
/// On disk the minute and second fields are named `min` and `secs`; files
/// written by earlier versions of the store use those keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDuration {
    pub hours: i64,
    #[serde(rename = "min")]
    pub minutes: i64,
    #[serde(rename = "secs")]
    pub seconds: i64,
}

impl PresetDuration {
    pub const fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check if every component is zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Convert to a countdown offset
    pub fn to_offset(&self) -> TimeDelta {
        offset_from_hms(self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for PresetDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&clock_text(self.to_offset()))
    }
}

/// One element of the store's top-level JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetRecord {
    /// Always lowercase
    pub name: String,
    pub duration: PresetDuration,
}

impl PresetRecord {
    pub fn new(name: &str, duration: PresetDuration) -> Self {
        Self {
            name: normalize_name(name),
            duration,
        }
    }

    /// Name as shown to users: first letter upper-cased
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Preset names are case-insensitive and stored lowercase
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Upper-case the first letter of a stored name
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
