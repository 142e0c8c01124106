//! The reconcile-and-write pipeline for appointments.
//!
//! One call is one self-contained read-then-optionally-write against the
//! device calendar store: permission check, calendar enumeration, duplicate
//! search, optional user confirmation, event creation. No state survives
//! the call, and the search always completes before anything is written.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::appointment::AppointmentRequest;
use crate::calendar::{select_target, CalendarHandle};
use crate::dedup::{is_duplicate, search_window, DuplicateMatch};
use crate::error::{ApptError, ApptResult};
use crate::platform::{AccessStatus, CalendarPlatform, NewEvent};
use crate::prompt::{DuplicateDecision, DuplicatePrompt};

/// Caller-facing switches for a single [`add_appointment`] call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// The appointment is being edited rather than created: skip the
    /// calendar entirely. Editing never re-touches the calendar.
    pub edit_mode: bool,
    /// Write without searching for duplicates first.
    pub skip_duplicate_check: bool,
}

/// Terminal outcome of a reconcile-and-write call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event was written.
    Created {
        event_id: String,
        calendar: CalendarHandle,
    },
    /// The user declined to add a duplicate.
    Cancelled,
    /// Edit mode: nothing to do.
    Skipped,
}

/// Reconcile a proposed appointment against the device's calendars and
/// write it if appropriate.
///
/// The pipeline: validate, request access, pick a target calendar, search
/// all calendars for a duplicate, ask the user on a hit, then create the
/// event on the target. At most one event is created per call and at most
/// one prompt is shown.
pub async fn add_appointment(
    platform: &dyn CalendarPlatform,
    prompt: &dyn DuplicatePrompt,
    request: &AppointmentRequest,
    options: AddOptions,
) -> ApptResult<Outcome> {
    if options.edit_mode {
        debug!("edit mode, leaving the calendar untouched");
        return Ok(Outcome::Skipped);
    }

    let start = request.start;
    let end = request.effective_end();

    // Rejected before any permission check or I/O.
    if end < start {
        return Err(ApptError::EndBeforeStart);
    }

    if platform.request_access().await? == AccessStatus::Denied {
        return Err(ApptError::PermissionDenied);
    }

    let calendars = platform.calendars().await?;
    let target = select_target(&calendars)
        .filter(|c| c.writable)
        .cloned()
        .ok_or(ApptError::NoWritableCalendar)?;
    debug!(calendar = %target.name, "selected target calendar");

    if !options.skip_duplicate_check {
        if let Some(duplicate) =
            find_duplicate(platform, &calendars, &request.title, start, end).await
        {
            debug!(
                calendar = %duplicate.calendar.name,
                title = %duplicate.event.title,
                "possible duplicate found"
            );
            match prompt.decide(&duplicate).await? {
                DuplicateDecision::Proceed => {}
                DuplicateDecision::Cancel | DuplicateDecision::Dismissed => {
                    return Ok(Outcome::Cancelled);
                }
            }
        }
    }

    let event = NewEvent {
        title: request.title.clone(),
        notes: request.description.clone(),
        location: request.location.clone(),
        tzid: device_timezone(),
        start,
        end,
        alarm_offset_minutes: request.reminder.map(|r| r.offset_minutes()),
    };

    let event_id = platform
        .create_event(&target.id, &event)
        .await
        .map_err(|e| match e {
            ApptError::WriteFailed(msg) => ApptError::WriteFailed(msg),
            other => ApptError::WriteFailed(other.to_string()),
        })?;

    Ok(Outcome::Created {
        event_id,
        calendar: target,
    })
}

/// Scan every enumerated calendar (not just the target) for an event
/// matching the request.
///
/// Calendars that fail to read are logged and skipped: a failure in one
/// never hides a duplicate sitting in another.
async fn find_duplicate(
    platform: &dyn CalendarPlatform,
    calendars: &[CalendarHandle],
    title: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<DuplicateMatch> {
    let (from, to) = search_window(start, end);

    for calendar in calendars {
        let events = match platform.events_between(&calendar.id, from, to).await {
            Ok(events) => events,
            Err(e) => {
                warn!(calendar = %calendar.name, error = %e, "skipping unreadable calendar");
                continue;
            }
        };

        if let Some(event) = events
            .into_iter()
            .find(|e| is_duplicate(e, title, start, end))
        {
            return Some(DuplicateMatch {
                calendar: calendar.clone(),
                event,
            });
        }
    }

    None
}

/// The device's IANA time zone, falling back to UTC when it can't be
/// determined.
fn device_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}
