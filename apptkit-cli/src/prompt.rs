//! Terminal implementation of the duplicate prompt.

use async_trait::async_trait;
use chrono::Local;
use dialoguer::Select;
use owo_colors::OwoColorize;

use apptkit_core::dedup::DuplicateMatch;
use apptkit_core::error::ApptResult;
use apptkit_core::prompt::{DuplicateDecision, DuplicatePrompt};

pub struct TerminalPrompt;

#[async_trait]
impl DuplicatePrompt for TerminalPrompt {
    async fn decide(&self, duplicate: &DuplicateMatch) -> ApptResult<DuplicateDecision> {
        let when = duplicate
            .event
            .start
            .with_timezone(&Local)
            .format("%a %b %-d, %H:%M");

        println!(
            "{}",
            format!(
                "  \"{}\" already exists on {} [{}]",
                duplicate.event.title, when, duplicate.calendar.name
            )
            .yellow()
        );

        let selection = Select::new()
            .with_prompt("  Add it anyway?")
            .items(&["Cancel", "Add anyway"])
            .default(0)
            .interact_opt();

        // Anything other than an explicit choice counts as walking away
        // from the prompt.
        Ok(match selection {
            Ok(Some(1)) => DuplicateDecision::Proceed,
            Ok(Some(_)) => DuplicateDecision::Cancel,
            Ok(None) | Err(_) => DuplicateDecision::Dismissed,
        })
    }
}
