//! Swift EventKit scripts for the bridge commands.
//!
//! Templates use `{placeholder}` markers substituted with escaped values;
//! dates cross the boundary as epoch seconds and come back as ISO 8601.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use apptkit_core::calendar::{CalendarHandle, ExistingEventView};
use apptkit_core::platform::{AccessStatus, NewEvent};

use crate::script::{escape_swift_string, run_swift_script};

pub fn request_access() -> Result<AccessStatus> {
    let output = run_swift_script(REQUEST_ACCESS)?;
    parse_json(&output)
}

pub fn list_calendars() -> Result<Vec<CalendarHandle>> {
    let output = run_swift_script(LIST_CALENDARS)?;
    parse_json(&output)
}

pub fn list_events(
    calendar_id: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<ExistingEventView>> {
    let output = run_swift_script(&list_events_script(calendar_id, from, to))?;
    parse_json(&output)
}

pub fn create_event(calendar_id: &str, event: &NewEvent) -> Result<String> {
    let output = run_swift_script(&create_event_script(calendar_id, event))?;
    parse_json(&output)
}

fn parse_json<T: serde::de::DeserializeOwned>(output: &str) -> Result<T> {
    serde_json::from_str(output).with_context(|| format!("Unexpected script output: {}", output))
}

const REQUEST_ACCESS: &str = r#"
import EventKit
import Foundation

let store = EKEventStore()
let semaphore = DispatchSemaphore(value: 0)
var granted = false

store.requestAccess(to: .event) { ok, _ in
    granted = ok
    semaphore.signal()
}
semaphore.wait()
print(granted ? "\"granted\"" : "\"denied\"")
"#;

const LIST_CALENDARS: &str = r#"
import EventKit
import Foundation

let store = EKEventStore()
var items: [[String: Any]] = []
for calendar in store.calendars(for: .event) {
    items.append([
        "id": calendar.calendarIdentifier,
        "name": calendar.title,
        "source": calendar.source.sourceType == .local ? "local" : "synced",
        "writable": calendar.allowsContentModifications,
    ])
}
let data = try JSONSerialization.data(withJSONObject: items)
print(String(data: data, encoding: .utf8)!)
"#;

const LIST_EVENTS: &str = r#"
import EventKit
import Foundation

let store = EKEventStore()
guard let calendar = store.calendar(withIdentifier: "{calendar_id}") else {
    print("error: no calendar with id {calendar_id}")
    exit(0)
}
let from = Date(timeIntervalSince1970: {from})
let to = Date(timeIntervalSince1970: {to})
let predicate = store.predicateForEvents(withStart: from, end: to, calendars: [calendar])
let formatter = ISO8601DateFormatter()
var items: [[String: Any]] = []
for event in store.events(matching: predicate) {
    items.append([
        "title": event.title ?? "",
        "start": formatter.string(from: event.startDate),
        "end": formatter.string(from: event.endDate),
    ])
}
let data = try JSONSerialization.data(withJSONObject: items)
print(String(data: data, encoding: .utf8)!)
"#;

const CREATE_EVENT: &str = r#"
import EventKit
import Foundation

let store = EKEventStore()
guard let calendar = store.calendar(withIdentifier: "{calendar_id}") else {
    print("error: no calendar with id {calendar_id}")
    exit(0)
}
let event = EKEvent(eventStore: store)
event.calendar = calendar
event.title = "{title}"
event.timeZone = TimeZone(identifier: "{tzid}")
event.startDate = Date(timeIntervalSince1970: {start})
event.endDate = Date(timeIntervalSince1970: {end})
{extras}
do {
    try store.save(event, span: .thisEvent, commit: true)
    print("\"\(event.eventIdentifier ?? "")\"")
} catch {
    print("error: \(error.localizedDescription)")
}
"#;

fn list_events_script(calendar_id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    LIST_EVENTS
        .replace("{calendar_id}", &escape_swift_string(calendar_id))
        .replace("{from}", &from.timestamp().to_string())
        .replace("{to}", &to.timestamp().to_string())
}

fn create_event_script(calendar_id: &str, event: &NewEvent) -> String {
    let mut extras = String::new();
    if let Some(notes) = &event.notes {
        extras.push_str(&format!("event.notes = \"{}\"\n", escape_swift_string(notes)));
    }
    if let Some(location) = &event.location {
        extras.push_str(&format!(
            "event.location = \"{}\"\n",
            escape_swift_string(location)
        ));
    }
    if let Some(offset) = event.alarm_offset_minutes {
        extras.push_str(&format!(
            "event.addAlarm(EKAlarm(relativeOffset: TimeInterval({} * 60)))\n",
            offset
        ));
    }

    CREATE_EVENT
        .replace("{calendar_id}", &escape_swift_string(calendar_id))
        .replace("{title}", &escape_swift_string(&event.title))
        .replace("{tzid}", &escape_swift_string(&event.tzid))
        .replace("{start}", &event.start.timestamp().to_string())
        .replace("{end}", &event.end.timestamp().to_string())
        .replace("{extras}", extras.trim_end())
}
