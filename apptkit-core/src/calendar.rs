//! Device calendar handles and event views.
//!
//! These types describe the device's calendar store in a bridge-neutral
//! way. Bridges convert their platform responses into these types, and the
//! reconciliation engine works exclusively with them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a calendar's storage lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarSource {
    /// Stored on the device itself.
    Local,
    /// Backed by a synced account (CalDAV, Exchange, Google, ...).
    Synced,
}

/// An opaque handle to one of the device's calendar containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarHandle {
    pub id: String,
    pub name: String,
    pub source: CalendarSource,
    pub writable: bool,
}

impl CalendarHandle {
    pub fn is_local_writable(&self) -> bool {
        self.source == CalendarSource::Local && self.writable
    }
}

impl fmt::Display for CalendarHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A stripped-down view of an existing event, produced by the enumeration
/// query and used only for duplicate comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingEventView {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Pick the calendar new events get written to.
///
/// Priority: first calendar that is both local and writable, then the first
/// writable calendar of any source, then the first calendar in the
/// enumeration regardless of writability. The caller is responsible for
/// rejecting a non-writable pick.
pub fn select_target(calendars: &[CalendarHandle]) -> Option<&CalendarHandle> {
    calendars
        .iter()
        .find(|c| c.is_local_writable())
        .or_else(|| calendars.iter().find(|c| c.writable))
        .or_else(|| calendars.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(id: &str, source: CalendarSource, writable: bool) -> CalendarHandle {
        CalendarHandle {
            id: id.to_string(),
            name: id.to_string(),
            source,
            writable,
        }
    }

    #[test]
    fn local_writable_wins_over_synced_writable() {
        let calendars = vec![
            handle("synced", CalendarSource::Synced, true),
            handle("readonly", CalendarSource::Local, false),
            handle("local", CalendarSource::Local, true),
        ];
        assert_eq!(select_target(&calendars).unwrap().id, "local");
    }

    #[test]
    fn synced_writable_wins_over_readonly() {
        let calendars = vec![
            handle("readonly", CalendarSource::Local, false),
            handle("synced", CalendarSource::Synced, true),
        ];
        assert_eq!(select_target(&calendars).unwrap().id, "synced");
    }

    #[test]
    fn falls_back_to_first_when_nothing_writable() {
        let calendars = vec![
            handle("a", CalendarSource::Synced, false),
            handle("b", CalendarSource::Local, false),
        ];
        assert_eq!(select_target(&calendars).unwrap().id, "a");
    }

    #[test]
    fn empty_enumeration_selects_nothing() {
        assert!(select_target(&[]).is_none());
    }
}
