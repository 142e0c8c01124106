//! Bridge subprocess transport.
//!
//! Talks to external bridge binaries (e.g. `apptkit-bridge-apple`) using
//! JSON over stdin/stdout, one request per invocation. Binaries are
//! discovered on `$PATH` by the naming convention `apptkit-bridge-<name>`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::calendar::{CalendarHandle, ExistingEventView};
use crate::error::{ApptError, ApptResult};
use crate::platform::{AccessStatus, CalendarPlatform, NewEvent};
use crate::protocol::{
    BridgeCommand, Command, CreateEvent, ListCalendars, ListEvents, Request, RequestAccess,
    Response,
};

const BRIDGE_TIMEOUT: Duration = Duration::from_secs(10);
/// Access requests can block on a native permission prompt; give the user
/// time to answer it.
const ACCESS_TIMEOUT: Duration = Duration::from_secs(120);

/// A named bridge binary on `$PATH`.
#[derive(Clone, Debug)]
pub struct Bridge(String);

impl Bridge {
    pub fn from_name(name: &str) -> Self {
        Bridge(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> ApptResult<std::path::PathBuf> {
        let binary_name = format!("apptkit-bridge-{}", self.0);
        which::which(&binary_name).map_err(|_| ApptError::BridgeNotInstalled(self.0.clone()))
    }

    /// Call a typed bridge command and return its response.
    pub async fn call<C: BridgeCommand>(&self, cmd: C) -> ApptResult<C::Response> {
        timeout(BRIDGE_TIMEOUT, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| ApptError::BridgeTimeout(BRIDGE_TIMEOUT.as_secs()))?
    }

    /// Call a typed bridge command with the long timeout used for
    /// user-interactive commands.
    pub async fn call_interactive<C: BridgeCommand>(&self, cmd: C) -> ApptResult<C::Response> {
        timeout(ACCESS_TIMEOUT, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| ApptError::BridgeTimeout(ACCESS_TIMEOUT.as_secs()))?
    }

    /// Low-level call: spawn the binary, write one request line, collect
    /// the single response line.
    async fn call_raw<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> ApptResult<R> {
        let params =
            serde_json::to_value(params).map_err(|e| ApptError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json =
            serde_json::to_string(&request).map_err(|e| ApptError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                ApptError::Bridge(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(ApptError::Bridge(format!(
                "Bridge exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(ApptError::Bridge("Bridge returned no response".into()));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| ApptError::Bridge(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(ApptError::Bridge(error)),
        }
    }
}

#[async_trait]
impl CalendarPlatform for Bridge {
    async fn request_access(&self) -> ApptResult<AccessStatus> {
        self.call_interactive(RequestAccess {}).await
    }

    async fn calendars(&self) -> ApptResult<Vec<CalendarHandle>> {
        self.call(ListCalendars {}).await
    }

    async fn events_between(
        &self,
        calendar_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApptResult<Vec<ExistingEventView>> {
        self.call(ListEvents {
            calendar_id: calendar_id.to_string(),
            from,
            to,
        })
        .await
    }

    async fn create_event(&self, calendar_id: &str, event: &NewEvent) -> ApptResult<String> {
        // A bridge-side error on creation is the write failing, not the
        // transport.
        match self
            .call(CreateEvent {
                calendar_id: calendar_id.to_string(),
                event: event.clone(),
            })
            .await
        {
            Ok(event_id) => Ok(event_id),
            Err(ApptError::Bridge(msg)) => Err(ApptError::WriteFailed(msg)),
            Err(other) => Err(other),
        }
    }
}
