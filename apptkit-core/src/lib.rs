//! Core library for the apptkit ecosystem.
//!
//! apptkit adds appointments to a device's calendars with duplicate
//! reconciliation. This crate provides:
//! - the reconcile-and-write engine ([`reconcile::add_appointment`])
//! - the [`platform::CalendarPlatform`] seam over the device store
//! - the bridge protocol and subprocess transport used to reach
//!   out-of-process platform implementations

pub mod appointment;
pub mod bridge;
pub mod calendar;
pub mod config;
pub mod dedup;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod protocol;
pub mod reconcile;
pub mod reminder;

pub use appointment::AppointmentRequest;
pub use error::{ApptError, ApptResult};
pub use reconcile::{add_appointment, AddOptions, Outcome};
pub use reminder::Reminder;
