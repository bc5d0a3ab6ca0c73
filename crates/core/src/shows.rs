//! Past/upcoming classification of shows relative to "now".

use crate::types::Timestamp;

/// Anything scheduled at a single instant.
pub trait Scheduled {
    fn start_time(&self) -> Timestamp;
}

/// A show starting exactly at `now` counts as upcoming.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time >= now
}

/// Split shows into `(past, upcoming)`, preserving input order in both.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: Timestamp) -> (Vec<T>, Vec<T>) {
    let (upcoming, past) = shows
        .into_iter()
        .partition(|s| is_upcoming(s.start_time(), now));
    (past, upcoming)
}
