//! User confirmation for detected duplicates.

use async_trait::async_trait;

use crate::dedup::DuplicateMatch;
use crate::error::ApptResult;

/// The user's answer to "this appointment already seems to exist".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDecision {
    /// Add the event anyway.
    Proceed,
    /// Leave the calendar untouched.
    Cancel,
    /// The prompt went away without an explicit answer. Treated as Cancel.
    Dismissed,
}

/// Asks the user what to do about a detected duplicate.
///
/// Shown at most once per call, between the duplicate search and the write.
#[async_trait]
pub trait DuplicatePrompt: Send + Sync {
    async fn decide(&self, duplicate: &DuplicateMatch) -> ApptResult<DuplicateDecision>;
}
