//! Duplicate detection for proposed appointments.

use chrono::{DateTime, Duration, Utc};

use crate::calendar::{CalendarHandle, ExistingEventView};

/// Tolerance applied to interval boundaries when matching events.
pub const TOLERANCE_MINUTES: i64 = 30;

/// Padding added to each side of the duplicate query window.
pub const SEARCH_PAD_MINUTES: i64 = 60;

/// An existing event that matched a proposed appointment, and the calendar
/// it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch {
    pub calendar: CalendarHandle,
    pub event: ExistingEventView,
}

/// The window queried when searching for duplicates: the requested interval
/// padded by one hour on each side.
pub fn search_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let pad = Duration::minutes(SEARCH_PAD_MINUTES);
    (start - pad, end + pad)
}

/// Whether `existing` counts as a duplicate of the requested interval.
///
/// Titles compare case-insensitively. Intervals compare with a symmetric
/// fuzzy-boundary test: the existing event overlaps when its start or end
/// lands within the tolerance of the requested start or end. The tolerance
/// applies to boundaries only, so long events separated by a short gap can
/// still match.
pub fn is_duplicate(
    existing: &ExistingEventView,
    title: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    titles_match(&existing.title, title) && boundaries_within_tolerance(existing, start, end)
}

fn titles_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn boundaries_within_tolerance(
    existing: &ExistingEventView,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    let tolerance = Duration::minutes(TOLERANCE_MINUTES);

    [existing.start, existing.end]
        .iter()
        .any(|boundary| (*boundary - start).abs() <= tolerance || (*boundary - end).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 20, hour, minute, 0).unwrap()
    }

    fn event(title: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> ExistingEventView {
        ExistingEventView {
            title: title.to_string(),
            start,
            end,
        }
    }

    // --- boundary tolerance ---

    #[test]
    fn start_29_minutes_late_is_a_duplicate() {
        let existing = event("Dentist", at(15, 29), at(16, 29));
        assert!(is_duplicate(&existing, "Dentist", at(15, 0), at(16, 0)));
    }

    #[test]
    fn start_31_minutes_late_is_not() {
        // 31 minutes past the requested start, and 29 minutes before the
        // requested end plus another hour: every boundary pair is > 30 apart.
        let existing = event("Dentist", at(17, 31), at(18, 31));
        assert!(!is_duplicate(&existing, "Dentist", at(15, 0), at(17, 0)));
    }

    #[test]
    fn existing_end_near_requested_start_matches() {
        let existing = event("Dentist", at(12, 0), at(14, 45));
        assert!(is_duplicate(&existing, "Dentist", at(15, 0), at(16, 0)));
    }

    #[test]
    fn tolerance_is_symmetric_across_boundaries() {
        // Existing start near the requested end.
        let existing = event("Dentist", at(16, 20), at(18, 0));
        assert!(is_duplicate(&existing, "Dentist", at(15, 0), at(16, 0)));
    }

    // --- titles ---

    #[test]
    fn titles_compare_case_insensitively() {
        let existing = event("dentist APPOINTMENT", at(15, 10), at(16, 0));
        assert!(is_duplicate(&existing, "Dentist Appointment", at(15, 0), at(16, 0)));
    }

    #[test]
    fn different_title_never_matches() {
        let existing = event("Standup", at(15, 0), at(16, 0));
        assert!(!is_duplicate(&existing, "Dentist", at(15, 0), at(16, 0)));
    }

    // --- search window ---

    #[test]
    fn window_pads_one_hour_each_side() {
        let (from, to) = search_window(at(15, 0), at(16, 0));
        assert_eq!(from, at(14, 0));
        assert_eq!(to, at(17, 0));
    }
}
