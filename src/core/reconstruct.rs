//! Signal reconstruction: missing-eye fallback, binocular averaging,
//! screen scaling and gap interpolation.

use crate::core::calculator::gaps::{find_gaps, interpolate_gap};
use crate::errors::{AppError, AppResult};
use crate::models::{CleanedSample, RawSample};
use std::path::PathBuf;

/// Substitute a lost eye with the other one. `None` only if both are lost.
fn fallback(left: Option<f64>, right: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (left, right) {
        (None, Some(r)) => (Some(r), Some(r)),
        (Some(l), None) => (Some(l), Some(l)),
        other => other,
    }
}

fn scale(left: Option<f64>, right: Option<f64>, extent: u32) -> Option<i32> {
    let (l, r) = fallback(left, right);
    Some(((l? + r?) / 2.0 * extent as f64).round() as i32)
}

/// One raw sample to screen pixels; no interpolation yet.
pub fn average_sample(raw: &RawSample, width: u32, height: u32) -> CleanedSample {
    CleanedSample {
        time_seconds: raw.time_seconds,
        wall_clock: raw.wall_clock,
        x: scale(raw.left_x, raw.right_x, width),
        y: scale(raw.left_y, raw.right_y, height),
    }
}

/// Interpolate interior gaps, trim the leading gap and rebase time so the
/// first kept sample sits at 0. A trailing gap stays missing.
///
/// Running this on its own output changes nothing.
pub fn fill_gaps(mut samples: Vec<CleanedSample>) -> Vec<CleanedSample> {
    let gaps = find_gaps(&samples);

    for gap in gaps.iter().filter(|g| g.is_interior()) {
        interpolate_gap(&mut samples, gap);
    }
    log::debug!(
        "interpolated {} interior gap(s) covering {} sample(s)",
        gaps.iter().filter(|g| g.is_interior()).count(),
        gaps.iter().filter(|g| g.is_interior()).map(|g| g.len).sum::<usize>()
    );

    let Some(leading) = gaps.first().filter(|g| g.is_leading()) else {
        return samples;
    };
    let Some(origin) = leading.after else {
        // nothing valid at all
        return Vec::new();
    };

    let min_time = samples[origin].time_seconds;
    log::debug!(
        "dropping {} leading sample(s), new time origin {min_time}",
        origin
    );

    samples
        .into_iter()
        .skip(origin)
        .map(|mut s| {
            s.time_seconds -= min_time;
            s
        })
        .collect()
}

/// Full reconstruction of a recording.
///
/// An empty recording is not an error. A non-empty one with no usable `x`
/// anywhere fails with [`AppError::NoValidData`].
pub fn reconstruct(raw: &[RawSample], width: u32, height: u32) -> AppResult<Vec<CleanedSample>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let averaged: Vec<CleanedSample> = raw
        .iter()
        .map(|r| average_sample(r, width, height))
        .collect();

    if averaged.iter().all(CleanedSample::is_missing) {
        return Err(AppError::NoValidData(PathBuf::new()));
    }

    Ok(fill_gaps(averaged))
}
