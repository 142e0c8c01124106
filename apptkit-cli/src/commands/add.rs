use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use apptkit_core::appointment::AppointmentRequest;
use apptkit_core::bridge::Bridge;
use apptkit_core::config::ApptConfig;
use apptkit_core::reconcile::{add_appointment, AddOptions, Outcome};
use apptkit_core::reminder::Reminder;

use crate::parse::{apply_duration, parse_datetime};
use crate::prompt::TerminalPrompt;

#[derive(Args)]
pub struct AddArgs {
    title: String,

    /// Start date/time (e.g. "tomorrow 3pm")
    #[arg(short, long)]
    start: String,

    /// End date/time (defaults to one hour after start)
    #[arg(short, long)]
    end: Option<String>,

    /// Duration instead of an end time (e.g. "90m")
    #[arg(short, long, conflicts_with = "end")]
    duration: Option<String>,

    /// Where the appointment takes place
    #[arg(short, long)]
    location: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Reminder phrase (e.g. "15 minutes before", "1 day before")
    #[arg(short, long)]
    reminder: Option<String>,

    /// Write without checking for duplicates
    #[arg(long)]
    anyway: bool,

    /// The appointment is being edited, not created; don't touch the calendar
    #[arg(long)]
    edit: bool,
}

pub async fn run(bridge: &Bridge, config: &ApptConfig, args: AddArgs) -> Result<()> {
    let title = args.title.trim().to_string();
    if title.is_empty() {
        anyhow::bail!("Title can't be empty");
    }

    let start = parse_datetime(&args.start)?;
    let end = match (&args.end, &args.duration) {
        (Some(end), _) => Some(parse_datetime(end)?),
        (None, Some(duration)) => Some(apply_duration(start, duration)?),
        (None, None) => None,
    };

    let reminder = args
        .reminder
        .as_deref()
        .map(Reminder::from_phrase)
        .or_else(|| config.default_reminder());

    let request = AppointmentRequest {
        title,
        description: args.notes.clone(),
        location: args.location.clone(),
        start,
        end,
        reminder,
    };

    let options = AddOptions {
        edit_mode: args.edit,
        skip_duplicate_check: args.anyway,
    };

    let outcome = add_appointment(bridge, &TerminalPrompt, &request, options).await?;

    match outcome {
        Outcome::Created { calendar, .. } => {
            println!(
                "{} {}",
                format!("  Created: {}", request.title).green(),
                format!("[{}]", calendar.name).dimmed()
            );
        }
        Outcome::Cancelled => {
            println!("{}", "  Cancelled, calendar untouched".yellow());
        }
        Outcome::Skipped => {
            println!("{}", "  Edit mode, calendar untouched".dimmed());
        }
    }

    Ok(())
}
