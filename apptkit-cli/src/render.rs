//! TUI rendering for apptkit types.
//!
//! Extension trait adding colored terminal rendering to core types using
//! owo_colors.

use apptkit_core::calendar::{CalendarHandle, CalendarSource};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarHandle {
    fn render(&self) -> String {
        let source = match self.source {
            CalendarSource::Local => "local",
            CalendarSource::Synced => "synced",
        };
        let access = if self.writable {
            "read-write".to_string()
        } else {
            "read-only".red().to_string()
        };

        format!("  {}  {} {}", self.name, source.dimmed(), access)
    }
}
