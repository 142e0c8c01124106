//! Error types for the apptkit ecosystem.

use thiserror::Error;

/// Errors that can occur while reconciling and writing appointments.
#[derive(Error, Debug)]
pub enum ApptError {
    #[error("Appointment ends before it starts")]
    EndBeforeStart,

    #[error("Calendar access was denied")]
    PermissionDenied,

    #[error("No writable calendar available on this device")]
    NoWritableCalendar,

    #[error("Could not create event: {0}")]
    WriteFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bridge error: {0}")]
    Bridge(String),

    #[error("Bridge '{0}' not found in PATH. Install it with:\n  cargo install apptkit-bridge-{0}")]
    BridgeNotInstalled(String),

    #[error("Bridge request timed out after {0}s")]
    BridgeTimeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for apptkit operations.
pub type ApptResult<T> = Result<T, ApptError>;
