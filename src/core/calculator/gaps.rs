//! Detection and linear interpolation of runs of missing gaze samples.

use crate::models::CleanedSample;

/// A maximal run of samples whose `x` is missing.
///
/// `before` is the last valid index preceding the run, `after` the first
/// valid index following it. A leading run has no `before`, a trailing run
/// has no `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub start: usize,
    pub len: usize,
    pub before: Option<usize>,
    pub after: Option<usize>,
}

impl Gap {
    pub fn is_leading(&self) -> bool {
        self.before.is_none()
    }

    pub fn is_trailing(&self) -> bool {
        self.after.is_none()
    }

    pub fn is_interior(&self) -> bool {
        !self.is_leading() && !self.is_trailing()
    }
}

/// Single pass over the sequence, in index order.
pub fn find_gaps(samples: &[CleanedSample]) -> Vec<Gap> {
    let mut gaps = Vec::new();
    let mut open: Option<usize> = None;

    for (index, sample) in samples.iter().enumerate() {
        match (sample.is_missing(), open) {
            (true, None) => open = Some(index),
            (false, Some(start)) => {
                gaps.push(Gap {
                    start,
                    len: index - start,
                    before: start.checked_sub(1),
                    after: Some(index),
                });
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        gaps.push(Gap {
            start,
            len: samples.len() - start,
            before: start.checked_sub(1),
            after: None,
        });
    }

    gaps
}

/// Values strictly between `start` and `end`, `steps - 1` of them:
/// `start + (end - start) * i / steps` for `i` in `1..steps`.
pub fn linear_interpolate(start: f64, end: f64, steps: usize) -> Vec<f64> {
    (1..steps)
        .map(|i| start + (end - start) * i as f64 / steps as f64)
        .collect()
}

/// Fill an interior gap in place. Values are truncated to whole pixels.
///
/// `y` is only filled when both of its endpoints are known; gap detection
/// does not look at `y`, so an endpoint can carry a missing `y`.
pub fn interpolate_gap(samples: &mut [CleanedSample], gap: &Gap) {
    let (Some(before), Some(after)) = (gap.before, gap.after) else {
        return;
    };
    let (Some(x0), Some(x1)) = (samples[before].x, samples[after].x) else {
        return;
    };
    let distance = after - before;

    let xs = linear_interpolate(x0 as f64, x1 as f64, distance);
    let ys = match (samples[before].y, samples[after].y) {
        (Some(y0), Some(y1)) => Some(linear_interpolate(y0 as f64, y1 as f64, distance)),
        _ => None,
    };

    for (j, x) in xs.iter().enumerate() {
        let row = &mut samples[before + 1 + j];
        row.x = Some(*x as i32);
        if let Some(ys) = &ys {
            row.y = Some(ys[j] as i32);
        }
    }
}
