//! Natural-language date/time parsing for the CLI.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

/// Parse a natural-language date/time ("tomorrow 3pm", "march 20 9:30")
/// into a UTC timestamp, interpreting it in the device's local time.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let expanded = expand_abbreviations(input);
    let naive = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))?;

    local_to_utc(naive)
}

/// Add a humantime duration ("45m", "2h") to a start timestamp.
pub fn apply_duration(start: DateTime<Utc>, input: &str) -> Result<DateTime<Utc>> {
    let std_dur = humantime::parse_duration(input)
        .map_err(|_| anyhow::anyhow!("Could not parse duration: \"{}\"", input))?;
    let dur = Duration::from_std(std_dur).context("Duration too large")?;

    Ok(start + dur)
}

fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    // During a DST fold, take the earlier of the two possible instants.
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("{} does not exist in the local time zone", naive))?;

    Ok(local.with_timezone(&Utc))
}

/// Expand day/month abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(expand_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_word(word: &str) -> &str {
    match word {
        "mon" => "monday",
        "tue" | "tues" => "tuesday",
        "wed" => "wednesday",
        "thu" | "thur" | "thurs" => "thursday",
        "fri" => "friday",
        "sat" => "saturday",
        "sun" => "sunday",
        "jan" => "january",
        "feb" => "february",
        "mar" => "march",
        "apr" => "april",
        "jun" => "june",
        "jul" => "july",
        "aug" => "august",
        "sep" | "sept" => "september",
        "oct" => "october",
        "nov" => "november",
        "dec" => "december",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- expand_abbreviations ---

    #[test]
    fn expands_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat 3pm"), "saturday 3pm");
        assert_eq!(expand_abbreviations("thurs noon"), "thursday noon");
        assert_eq!(expand_abbreviations("Mon"), "monday");
    }

    #[test]
    fn expands_month_abbreviations() {
        assert_eq!(expand_abbreviations("mar 20 9:30"), "march 20 9:30");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn leaves_full_words_alone() {
        assert_eq!(expand_abbreviations("tomorrow 6pm"), "tomorrow 6pm");
        assert_eq!(expand_abbreviations("next friday"), "next friday");
    }

    // --- parse_datetime ---

    #[test]
    fn parses_relative_input() {
        assert!(parse_datetime("tomorrow 3pm").is_ok());
        assert!(parse_datetime("sat 9am").is_ok());
    }

    #[test]
    fn rejects_nonsense() {
        assert!(parse_datetime("not a date at all xyz").is_err());
    }

    // --- apply_duration ---

    #[test]
    fn duration_adds_to_start() {
        let start = parse_datetime("tomorrow 3pm").unwrap();
        assert_eq!(apply_duration(start, "45m").unwrap(), start + Duration::minutes(45));
        assert_eq!(apply_duration(start, "2h").unwrap(), start + Duration::hours(2));
    }

    #[test]
    fn bad_duration_is_an_error() {
        let start = parse_datetime("tomorrow 3pm").unwrap();
        assert!(apply_duration(start, "a while").is_err());
    }
}
