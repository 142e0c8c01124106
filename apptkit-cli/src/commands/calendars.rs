use anyhow::Result;
use owo_colors::OwoColorize;

use apptkit_core::bridge::Bridge;
use apptkit_core::platform::CalendarPlatform;

use crate::render::Render;
use crate::utils::create_spinner;

pub async fn run(bridge: &Bridge) -> Result<()> {
    let spinner = create_spinner("Reading calendars".to_string());
    let result = bridge.calendars().await;
    spinner.finish_and_clear();

    let calendars = result?;

    if calendars.is_empty() {
        println!("{}", "  No calendars found".dimmed());
        return Ok(());
    }

    for calendar in &calendars {
        println!("{}", calendar.render());
    }

    Ok(())
}
