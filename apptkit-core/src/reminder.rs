//! Reminder offsets for appointment alarms.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How long before an appointment's start its alarm should fire.
///
/// A closed set: the UI layer maps free-text phrases onto it with
/// [`Reminder::from_phrase`], everything past that point works with the
/// enum only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reminder {
    FifteenMin,
    ThirtyMin,
    OneHour,
    TwoHours,
    OneDay,
}

impl Reminder {
    /// Alarm offset in minutes relative to the event start. Always negative:
    /// the alarm fires before the event.
    pub fn offset_minutes(self) -> i64 {
        match self {
            Reminder::FifteenMin => -15,
            Reminder::ThirtyMin => -30,
            Reminder::OneHour => -60,
            Reminder::TwoHours => -120,
            Reminder::OneDay => -1440,
        }
    }

    /// Map a human reminder phrase onto the closed set.
    ///
    /// Unrecognized phrases fall back to one hour before.
    pub fn from_phrase(phrase: &str) -> Self {
        match phrase.trim().to_lowercase().as_str() {
            "15 minutes before" => Reminder::FifteenMin,
            "30 minutes before" => Reminder::ThirtyMin,
            "1 hour before" => Reminder::OneHour,
            "2 hours before" => Reminder::TwoHours,
            "1 day before" => Reminder::OneDay,
            _ => Reminder::OneHour,
        }
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Reminder::FifteenMin => "15 minutes before",
            Reminder::ThirtyMin => "30 minutes before",
            Reminder::OneHour => "1 hour before",
            Reminder::TwoHours => "2 hours before",
            Reminder::OneDay => "1 day before",
        };
        write!(f, "{}", label)
    }
}
