use chrono::{DateTime, Utc};

/// Averaged, screen-scaled gaze sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSample {
    pub time_seconds: f64,
    pub wall_clock: DateTime<Utc>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl CleanedSample {
    /// Gap detection only looks at `x`; a lone missing `y` does not open a gap.
    pub fn is_missing(&self) -> bool {
        self.x.is_none()
    }

    /// Pixel coordinates when both axes are known.
    pub fn point(&self) -> Option<(i32, i32)> {
        Some((self.x?, self.y?))
    }
}
