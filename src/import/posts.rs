// src/import/posts.rs

use crate::errors::{AppError, AppResult};
use crate::models::Post;
use crate::utils::path::ParticipantLayout;
use std::fs;
use std::path::Path;

/// Load post metadata, keeping the file's order.
///
/// When `participant` is given, records tagged with a different `userName`
/// (case-insensitive) are dropped; untagged records are kept. A kept post
/// whose window cannot be placed on the calendar is malformed input.
pub fn load_posts(path: &Path, participant: Option<&str>) -> AppResult<Vec<Post>> {
    ParticipantLayout::require(path)?;
    let content = fs::read_to_string(path)?;

    let posts: Vec<Post> = serde_json::from_str(&content)
        .map_err(|e| AppError::malformed(path, format!("invalid post metadata: {e}")))?;
    let total = posts.len();

    let posts: Vec<Post> = match participant {
        Some(name) => posts.into_iter().filter(|p| p.belongs_to(name)).collect(),
        None => posts,
    };

    if let Some(bad) = posts.iter().find(|p| p.wall_clock_window().is_none()) {
        return Err(AppError::malformed(
            path,
            format!(
                "post {}: window {}..{} s from {} is out of range",
                bad.post_id,
                bad.start_time_seconds,
                bad.end_time_seconds,
                bad.reference_wall_clock
            ),
        ));
    }

    if posts.len() != total {
        log::info!(
            "kept {} of {} post record(s) for this participant",
            posts.len(),
            total
        );
    }
    Ok(posts)
}
