use anyhow::Result;
use owo_colors::OwoColorize;

use apptkit_core::bridge::Bridge;
use apptkit_core::platform::{AccessStatus, CalendarPlatform};

pub async fn run(bridge: &Bridge) -> Result<()> {
    match bridge.request_access().await? {
        AccessStatus::Granted => {
            println!("{}", "  Calendar access granted".green());
            Ok(())
        }
        AccessStatus::Denied => {
            anyhow::bail!("Calendar access denied. Grant it in your device's privacy settings.")
        }
    }
}
