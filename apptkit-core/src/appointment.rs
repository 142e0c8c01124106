//! Appointment requests.

use chrono::{DateTime, Duration, Utc};

use crate::reminder::Reminder;

/// A proposed appointment, constructed by the caller per invocation.
///
/// The request has no existence beyond a single reconcile-and-write call;
/// nothing is cached or retained between calls. `title` is expected to be
/// non-empty after trimming (caller responsibility).
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    /// When absent, the appointment lasts one hour.
    pub end: Option<DateTime<Utc>>,
    pub reminder: Option<Reminder>,
}

impl AppointmentRequest {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>) -> Self {
        AppointmentRequest {
            title: title.into(),
            description: None,
            location: None,
            start,
            end: None,
            reminder: None,
        }
    }

    /// End of the appointment, defaulting to one hour after start.
    ///
    /// Used for both the duplicate search and the eventual write, so the
    /// two always agree.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or_else(|| self.start + Duration::hours(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_end_defaults_to_one_hour() {
        let start = Utc.with_ymd_and_hms(2026, 3, 20, 15, 0, 0).unwrap();
        let request = AppointmentRequest::new("Dentist", start);
        assert_eq!(request.effective_end(), start + Duration::minutes(60));
    }

    #[test]
    fn explicit_end_is_kept() {
        let start = Utc.with_ymd_and_hms(2026, 3, 20, 15, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 20, 15, 30, 0).unwrap();
        let request = AppointmentRequest {
            end: Some(end),
            ..AppointmentRequest::new("Dentist", start)
        };
        assert_eq!(request.effective_end(), end);
    }
}
