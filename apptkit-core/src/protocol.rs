//! Bridge protocol types.
//!
//! Defines the JSON protocol spoken between apptkit and bridge binaries
//! over stdin/stdout. The protocol is language-agnostic: any executable
//! that speaks it can expose a device's calendar store.
//!
//! Bridges own every platform-specific concern (entitlements, native API
//! calls, permission prompts); the engine only ever sees these types.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use chrono::{DateTime, Utc};

use crate::calendar::{CalendarHandle, ExistingEventView};
use crate::platform::{AccessStatus, NewEvent};

/// A typed bridge command with its expected response.
///
/// The response type is tied to the command at compile time, so a call
/// site can't pair a command with the wrong deserialization target.
pub trait BridgeCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

/// Commands every bridge must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    RequestAccess,
    ListCalendars,
    ListEvents,
    CreateEvent,
}

/// Request sent from apptkit to the bridge.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the bridge back to apptkit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Ask the platform for calendar access. May block on a native permission
/// prompt, so the transport gives it a longer timeout.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestAccess {}

impl BridgeCommand for RequestAccess {
    type Response = AccessStatus;
    fn command() -> Command {
        Command::RequestAccess
    }
}

/// Enumerate all event-capable calendars on the device.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCalendars {}

impl BridgeCommand for ListCalendars {
    type Response = Vec<CalendarHandle>;
    fn command() -> Command {
        Command::ListCalendars
    }
}

/// Events in one calendar intersecting `[from, to]`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEvents {
    pub calendar_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl BridgeCommand for ListEvents {
    type Response = Vec<ExistingEventView>;
    fn command() -> Command {
        Command::ListEvents
    }
}

/// Create an event in one calendar.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEvent {
    pub calendar_id: String,
    pub event: NewEvent,
}

impl BridgeCommand for CreateEvent {
    /// The platform-assigned event id.
    type Response = String;
    fn command() -> Command {
        Command::CreateEvent
    }
}
