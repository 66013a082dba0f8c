#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, Utc};
use gazetrail::models::{CleanedSample, RawSample};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const REFERENCE: &str = "2024-05-01T12:00:00.000Z";

pub fn gt() -> Command {
    cargo_bin_cmd!("gazetrail")
}

/// Fresh, empty directory inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("gazetrail_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn reference() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(REFERENCE)
        .expect("reference timestamp")
        .with_timezone(&Utc)
}

/// Reference clock shifted by `seconds` (may be negative).
pub fn wall(seconds: f64) -> DateTime<Utc> {
    reference() + Duration::milliseconds((seconds * 1000.0).round() as i64)
}

pub fn raw(
    t: f64,
    clock: f64,
    left: (Option<f64>, Option<f64>),
    right: (Option<f64>, Option<f64>),
) -> RawSample {
    RawSample::new(t, wall(clock), left, right)
}

pub fn both(t: f64, x: f64, y: f64) -> RawSample {
    raw(t, t, (Some(x), Some(y)), (Some(x), Some(y)))
}

pub fn lost(t: f64) -> RawSample {
    raw(t, t, (None, None), (None, None))
}

pub fn cleaned(t: f64, clock: f64, x: Option<i32>, y: Option<i32>) -> CleanedSample {
    CleanedSample {
        time_seconds: t,
        wall_clock: wall(clock),
        x,
        y,
    }
}

/// A participant directory with a raw recording, post metadata and
/// screenshots:
///
/// - 12 samples every 0.5 s from 1 s before the reference clock; the first
///   two have no gaze, sample 5 lost its left eye, sample 7 lost both eyes
/// - posts 1 = [0, 2], 2 = [2.5, 4], 3 = [10, 20]
/// - screenshots at +1 s and +0 s (post 1) and +3 s (post 2)
pub fn write_fixture(data_dir: &Path, participant: &str) -> PathBuf {
    let root = data_dir.join(participant);
    fs::create_dir_all(root.join("times")).expect("times dir");
    fs::create_dir_all(root.join("screenshots")).expect("screenshots dir");

    let mut csv = String::from("time_seconds,current_time,left_x,left_y,right_x,right_y\n");
    for i in 0..12 {
        let t = i as f64 * 0.5;
        let clock = wall(t - 1.0).to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let coords = match i {
            0 | 1 | 7 => "nan,nan,nan,nan".to_string(),
            5 => "NaN,NaN,0.5,0.5".to_string(),
            _ => "0.25,0.5,0.75,0.5".to_string(),
        };
        csv.push_str(&format!("{t},{clock},{coords}\n"));
    }
    fs::write(root.join("gaze.csv"), csv).expect("write raw gaze");

    let posts = format!(
        r#"[
  {{"postID": 1, "PostStartTime": 0, "PostEndTime": 2, "initialDate": "{REFERENCE}", "userName": "{participant}"}},
  {{"postID": 2, "PostStartTime": 2.5, "PostEndTime": 4.0, "initialDate": "{REFERENCE}", "userName": "{participant}"}},
  {{"postID": 3, "PostStartTime": 10, "PostEndTime": 20, "initialDate": "{REFERENCE}", "userName": "{participant}"}},
  {{"postID": 9, "PostStartTime": 0, "PostEndTime": 20, "initialDate": "{REFERENCE}", "userName": "someone_else"}}
]"#
    );
    fs::write(
        root.join("times").join(format!("{participant}_posts_times.json")),
        posts,
    )
    .expect("write posts");

    for name in [
        "screenshot_2024-05-01T12_00_01.png",
        "screenshot_2024-05-01T12_00_00.png",
        "screenshot_2024-05-01T12_00_03.png",
    ] {
        fs::write(root.join("screenshots").join(name), name).expect("write screenshot");
    }

    root
}
