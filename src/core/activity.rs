//! Earliest-finish-time activity selection over matches.
//!
//! # Algorithm
//!
//! 1. Stable-sort matches by end time (ties keep input order).
//! 2. Walk the sorted list, taking every match that starts at or after the end of the
//!    last one taken.
//!
//! Touching endpoints (`start == previous end`) do not overlap. The result is a maximum-size
//! set of pairwise compatible matches, in end-time order.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.

use crate::domain::model::Match;
use crate::utils::error::{Result, RosterError};

pub const MIN_MATCHES: usize = 4;

pub fn select_matches(matches: &[Match]) -> Result<Vec<Match>> {
    if matches.len() < MIN_MATCHES {
        return Err(RosterError::InsufficientInput {
            what: "matches".to_string(),
            minimum: MIN_MATCHES,
            actual: matches.len(),
        });
    }

    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| a.end.total_cmp(&b.end));

    let mut last_end = f64::NEG_INFINITY;
    let mut selected = Vec::new();
    for candidate in sorted {
        if candidate.start >= last_end {
            last_end = candidate.end;
            selected.push(candidate);
        }
    }

    tracing::debug!(
        "Selected {} of {} matches",
        selected.len(),
        matches.len()
    );
    Ok(selected)
}
