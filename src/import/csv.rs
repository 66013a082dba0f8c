// src/import/csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::{CleanedSample, RawSample, SegmentPoint};
use crate::utils::path::ParticipantLayout;
use crate::utils::time::parse_wall_clock;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Raw recorder row, kept as text so missing markers can be told apart
/// from garbage.
#[derive(Debug, Deserialize)]
struct RawRow {
    time_seconds: String,
    current_time: String,
    left_x: String,
    left_y: String,
    right_x: String,
    right_y: String,
}

#[derive(Debug, Deserialize)]
struct CleanedRow {
    time_seconds: String,
    current_time: String,
    x: String,
    y: String,
}

fn is_missing_marker(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("nan")
}

/// `nan`, `NaN` and empty cells are missing; anything else must be a number.
fn parse_coordinate(value: &str, column: &str, line: usize) -> Result<Option<f64>, String> {
    let v = value.trim();
    if is_missing_marker(v) {
        return Ok(None);
    }
    let parsed: f64 = v
        .parse()
        .map_err(|_| format!("line {line}: {column} '{value}' is not a number"))?;
    Ok((!parsed.is_nan()).then_some(parsed))
}

fn parse_pixel(value: &str, column: &str, line: usize) -> Result<Option<i32>, String> {
    let v = value.trim();
    if is_missing_marker(v) {
        return Ok(None);
    }
    v.parse()
        .map(Some)
        .map_err(|_| format!("line {line}: {column} '{value}' is not an integer pixel"))
}

fn parse_time(value: &str, line: usize) -> Result<f64, String> {
    let v = value.trim();
    match v.parse::<f64>() {
        Ok(t) if t.is_finite() => Ok(t),
        _ => Err(format!("line {line}: time_seconds '{value}' is not a number")),
    }
}

fn parse_clock(value: &str, line: usize) -> Result<DateTime<Utc>, String> {
    parse_wall_clock(value)
        .ok_or_else(|| format!("line {line}: current_time '{value}' is not an ISO-8601 timestamp"))
}

fn open(path: &Path) -> AppResult<::csv::Reader<std::fs::File>> {
    ParticipantLayout::require(path)?;
    ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_path(path)
        .map_err(AppError::from)
}

fn row_error(path: &Path, e: ::csv::Error) -> AppError {
    AppError::malformed(path, e.to_string())
}

/// Read a raw binocular recording (`time_seconds,current_time,left_x,left_y,right_x,right_y`).
pub fn read_raw_samples(path: &Path) -> AppResult<Vec<RawSample>> {
    let mut rdr = open(path)?;
    let mut out = Vec::new();

    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        let line = i + 2;
        let row = row.map_err(|e| row_error(path, e))?;
        let sample = (|| -> Result<RawSample, String> {
            Ok(RawSample {
                time_seconds: parse_time(&row.time_seconds, line)?,
                wall_clock: parse_clock(&row.current_time, line)?,
                left_x: parse_coordinate(&row.left_x, "left_x", line)?,
                left_y: parse_coordinate(&row.left_y, "left_y", line)?,
                right_x: parse_coordinate(&row.right_x, "right_x", line)?,
                right_y: parse_coordinate(&row.right_y, "right_y", line)?,
            })
        })()
        .map_err(|detail| AppError::malformed(path, detail))?;
        out.push(sample);
    }

    log::debug!("read {} raw sample(s) from {}", out.len(), path.display());
    Ok(out)
}

/// Read a reconstructed trace (`time_seconds,current_time,x,y`).
pub fn read_cleaned_samples(path: &Path) -> AppResult<Vec<CleanedSample>> {
    let mut rdr = open(path)?;
    let mut out = Vec::new();

    for (i, row) in rdr.deserialize::<CleanedRow>().enumerate() {
        let line = i + 2;
        let row = row.map_err(|e| row_error(path, e))?;
        let sample = (|| -> Result<CleanedSample, String> {
            Ok(CleanedSample {
                time_seconds: parse_time(&row.time_seconds, line)?,
                wall_clock: parse_clock(&row.current_time, line)?,
                x: parse_pixel(&row.x, "x", line)?,
                y: parse_pixel(&row.y, "y", line)?,
            })
        })()
        .map_err(|detail| AppError::malformed(path, detail))?;
        out.push(sample);
    }

    log::debug!("read {} cleaned sample(s) from {}", out.len(), path.display());
    Ok(out)
}

/// Read back a per-post gaze file (`x,y,time_seconds`).
pub fn read_segment(path: &Path) -> AppResult<Vec<SegmentPoint>> {
    let mut rdr = open(path)?;
    rdr.deserialize::<SegmentPoint>()
        .map(|row| row.map_err(|e| row_error(path, e)))
        .collect()
}
