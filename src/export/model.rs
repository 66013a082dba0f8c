// src/export/model.rs

use serde::{Deserialize, Serialize};

/// Raw recorder row as written to `gaze.csv`.
#[derive(Serialize, Debug)]
pub(crate) struct RawRecord {
    pub time_seconds: f64,
    pub current_time: String,
    pub left_x: f64,
    pub left_y: f64,
    pub right_x: f64,
    pub right_y: f64,
}

/// Reconstructed row as written to `gaze_clean.csv`; `None` becomes an empty cell.
#[derive(Serialize, Debug)]
pub(crate) struct CleanedRecord {
    pub time_seconds: f64,
    pub current_time: String,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

/// One entry of `<participant>_posts_index.json`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SegmentIndexEntry {
    pub post_id: i64,
    pub gaze_file: String,
    pub sample_count: usize,
    pub screenshot: Option<String>,
}
