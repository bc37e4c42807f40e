//! Travel schedule optimizer: 0/1 knapsack over venues.
//!
//! Each venue is an item whose weight and value are both its stored distance; the capacity is
//! the travel-time budget. Fractional distances are truncated when used as a column offset but
//! counted in full as value, so a plan's total can exceed the budget by less than one unit per
//! venue.
//!
//! Backtracking stops as soon as the remaining budget reaches zero. Column zero never records
//! an inclusion, and a zero-distance venue never wins its tie, so such venues are never part of
//! a plan.

use crate::domain::model::{TravelPlan, Venue};
use crate::utils::error::{Result, RosterError};

pub const MIN_VENUES: usize = 2;

pub fn optimize_travel(venues: &[Venue], max_travel_time: u32) -> Result<TravelPlan> {
    if venues.len() < MIN_VENUES {
        return Err(RosterError::InsufficientInput {
            what: "venues".to_string(),
            minimum: MIN_VENUES,
            actual: venues.len(),
        });
    }
    if let Some(bad) = venues
        .iter()
        .find(|v| !v.distance.is_finite() || v.distance < 0.0)
    {
        return Err(RosterError::InvalidInput {
            message: format!(
                "venue '{}' has invalid travel time {}",
                bad.name, bad.distance
            ),
        });
    }

    let n = venues.len();
    let capacity = max_travel_time as usize;
    let mut best = vec![vec![0.0_f64; capacity + 1]; n + 1];
    let mut included = vec![vec![false; capacity + 1]; n + 1];

    for i in 1..=n {
        let distance = venues[i - 1].distance;
        let weight = distance as usize;
        for j in 1..=capacity {
            best[i][j] = best[i - 1][j];
            if distance <= j as f64 {
                let with = distance + best[i - 1][j - weight];
                if with > best[i - 1][j] {
                    best[i][j] = with;
                    included[i][j] = true;
                }
            }
        }
    }

    let mut chosen = Vec::new();
    let mut total_distance = 0.0;
    let (mut i, mut j) = (n, capacity);
    while i > 0 && j > 0 {
        if included[i][j] {
            let venue = &venues[i - 1];
            chosen.push(venue.name.clone());
            total_distance += venue.distance;
            j -= venue.distance as usize;
        }
        i -= 1;
    }
    chosen.reverse();

    tracing::debug!(
        "Travel plan: {} of {} venues, total {} within budget {}",
        chosen.len(),
        n,
        total_distance,
        max_travel_time
    );

    Ok(TravelPlan {
        venues: chosen,
        total_distance,
    })
}
