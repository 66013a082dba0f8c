//! Aligning the tracker clock with the experiment's reference clock.

use crate::models::CleanedSample;
use crate::utils::time::seconds_between;
use chrono::{DateTime, Utc};

/// The tracker time offset that corresponds to `reference`.
///
/// This is the time of the latest sample recorded strictly before
/// `reference`. When the recording started after `reference`, the offset is
/// negative: minus the wall-clock distance between the first sample and
/// `reference`. An empty trace yields 0.
pub fn clock_offset(samples: &[CleanedSample], reference: DateTime<Utc>) -> f64 {
    if let Some(last_before) = samples.iter().rev().find(|s| s.wall_clock < reference) {
        return last_before.time_seconds;
    }

    match samples.first() {
        Some(first) => -seconds_between(first.wall_clock, reference).abs(),
        None => 0.0,
    }
}

/// Shift every sample by `-offset` and drop those that end up before zero.
pub fn rebase(samples: &[CleanedSample], offset: f64) -> Vec<CleanedSample> {
    samples
        .iter()
        .filter_map(|s| {
            let time_seconds = s.time_seconds - offset;
            (time_seconds >= 0.0).then(|| CleanedSample {
                time_seconds,
                ..s.clone()
            })
        })
        .collect()
}
