// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::model::{CleanedRecord, RawRecord};
use crate::models::{CleanedSample, RawSample, SegmentPoint};
use crate::utils::time::format_wall_clock;
use serde::Serialize;
use std::path::Path;

fn write_rows<T: Serialize>(path: &Path, rows: impl IntoIterator<Item = T>) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Lost coordinates are written as `NaN`, the recorder's own marker.
pub fn write_raw_samples(path: &Path, samples: &[RawSample]) -> AppResult<()> {
    let missing = |v: Option<f64>| v.unwrap_or(f64::NAN);
    write_rows(
        path,
        samples.iter().map(|s| RawRecord {
            time_seconds: s.time_seconds,
            current_time: format_wall_clock(&s.wall_clock),
            left_x: missing(s.left_x),
            left_y: missing(s.left_y),
            right_x: missing(s.right_x),
            right_y: missing(s.right_y),
        }),
    )
}

pub fn write_cleaned_samples(path: &Path, samples: &[CleanedSample]) -> AppResult<()> {
    write_rows(
        path,
        samples.iter().map(|s| CleanedRecord {
            time_seconds: s.time_seconds,
            current_time: format_wall_clock(&s.wall_clock),
            x: s.x,
            y: s.y,
        }),
    )
}

/// Per-post file: `x,y,time_seconds`.
pub fn write_segment(path: &Path, points: &[SegmentPoint]) -> AppResult<()> {
    write_rows(path, points)
}
