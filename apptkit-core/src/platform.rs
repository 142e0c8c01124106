//! The seam between the engine and the device's calendar store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarHandle, ExistingEventView};
use crate::error::ApptResult;

/// Outcome of asking the platform for calendar access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    Granted,
    Denied,
}

/// Fields for a new calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// IANA time zone the event is created in (the device's own).
    pub tzid: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Minutes relative to start at which a single alarm fires. Negative
    /// means before the event; absent means no alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_offset_minutes: Option<i64>,
}

/// The device calendar store, as far as the engine is concerned.
///
/// Treated as an unreliable, possibly-partial I/O boundary: a failed
/// per-calendar query is non-fatal to the duplicate search, a failed
/// creation is fatal to the call.
#[async_trait]
pub trait CalendarPlatform: Send + Sync {
    /// Ask the platform for read/write access to its calendars. May block
    /// on a user-facing permission prompt.
    async fn request_access(&self) -> ApptResult<AccessStatus>;

    /// Enumerate all event-capable calendars.
    async fn calendars(&self) -> ApptResult<Vec<CalendarHandle>>;

    /// Events in one calendar intersecting `[from, to]`.
    async fn events_between(
        &self,
        calendar_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApptResult<Vec<ExistingEventView>>;

    /// Create an event, returning its platform-assigned id.
    async fn create_event(&self, calendar_id: &str, event: &NewEvent) -> ApptResult<String>;
}
