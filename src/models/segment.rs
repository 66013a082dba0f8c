use serde::{Deserialize, Serialize};

/// One row of a per-post gaze file. Field order is the column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint {
    pub x: i32,
    pub y: i32,
    pub time_seconds: f64,
}

/// Samples matched to a single post, plus the screenshot shown during it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSegment {
    pub post_id: i64,
    pub points: Vec<SegmentPoint>,
    /// Original file name of the paired screenshot, if any matched.
    pub screenshot: Option<String>,
}

impl PostSegment {
    pub fn gaze_file_name(&self, participant: &str) -> String {
        format!("{participant}_gaze_{}.csv", self.post_id)
    }

    pub fn screenshot_file_name(&self, participant: &str) -> String {
        format!("{participant}_screenshot_{}.png", self.post_id)
    }
}
