// src/import/screenshots.rs

use crate::errors::{AppError, AppResult};
use crate::models::Screenshot;
use crate::utils::time::parse_screenshot_stamp;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static SCREENSHOT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^screenshot_(.+)\.png$").expect("valid screenshot regex"));

/// `screenshot_2024-05-01T12_30_45.png` → capture time.
///
/// `None` for names that are not raw captures (e.g. already renamed ones);
/// an error for raw captures whose time cannot be read.
pub fn parse_screenshot_name(filename: &str) -> Option<Result<Screenshot, String>> {
    let caps = SCREENSHOT_NAME.captures(filename)?;
    let stamp = &caps[1];
    Some(
        parse_screenshot_stamp(stamp)
            .map(|captured_at| Screenshot {
                filename: filename.to_string(),
                captured_at,
            })
            .ok_or_else(|| format!("screenshot '{filename}' has an unreadable timestamp '{stamp}'")),
    )
}

/// List the raw captures in `dir`, sorted by file name.
///
/// A missing directory yields no screenshots: segments are still emitted
/// without a background image.
pub fn scan_screenshots(dir: &Path) -> AppResult<Vec<Screenshot>> {
    if !dir.is_dir() {
        log::warn!("screenshot directory {} not found", dir.display());
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    let mut shots = Vec::new();
    for name in names {
        match parse_screenshot_name(&name) {
            Some(Ok(shot)) => shots.push(shot),
            Some(Err(detail)) => return Err(AppError::malformed(dir.join(&name), detail)),
            None => log::debug!("ignoring {name}"),
        }
    }

    Ok(shots)
}
