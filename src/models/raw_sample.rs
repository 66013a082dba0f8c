use chrono::{DateTime, Utc};

/// One tracker callback: both eyes' gaze point on the display area,
/// normalized to [0, 1]. `None` marks a coordinate the tracker lost.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub time_seconds: f64,
    pub wall_clock: DateTime<Utc>,
    pub left_x: Option<f64>,
    pub left_y: Option<f64>,
    pub right_x: Option<f64>,
    pub right_y: Option<f64>,
}

impl RawSample {
    pub fn new(
        time_seconds: f64,
        wall_clock: DateTime<Utc>,
        left: (Option<f64>, Option<f64>),
        right: (Option<f64>, Option<f64>),
    ) -> Self {
        Self {
            time_seconds,
            wall_clock,
            left_x: left.0,
            left_y: left.1,
            right_x: right.0,
            right_y: right.1,
        }
    }

    /// Both eyes present on both axes.
    pub fn is_binocular(&self) -> bool {
        self.left_x.is_some()
            && self.left_y.is_some()
            && self.right_x.is_some()
            && self.right_y.is_some()
    }
}
