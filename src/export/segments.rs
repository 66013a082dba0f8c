// src/export/segments.rs

use crate::errors::AppResult;
use crate::export::csv::write_segment;
use crate::export::fs_utils::move_or_copy;
use crate::export::model::SegmentIndexEntry;
use crate::models::PostSegment;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// What [`emit_segments`] put on disk.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub gaze_files: Vec<PathBuf>,
    pub screenshots: Vec<PathBuf>,
    pub index: Option<PathBuf>,
}

/// Write one gaze file per segment into `out_dir`, rename each paired
/// screenshot inside `screenshots_dir` to its canonical name and write the
/// segment index.
///
/// A post that already has its canonical screenshot keeps it, so re-running
/// the match never replaces the earliest capture with a later one.
pub fn emit_segments(
    participant: &str,
    segments: &[PostSegment],
    out_dir: &Path,
    screenshots_dir: &Path,
) -> AppResult<EmitReport> {
    fs::create_dir_all(out_dir)?;
    let mut report = EmitReport::default();
    let mut index = Vec::with_capacity(segments.len());

    for segment in segments {
        let gaze_file = segment.gaze_file_name(participant);
        let gaze_path = out_dir.join(&gaze_file);
        write_segment(&gaze_path, &segment.points)?;
        report.gaze_files.push(gaze_path);

        let canonical = segment.screenshot_file_name(participant);
        let to = screenshots_dir.join(&canonical);
        let mut screenshot = None;
        if to.is_file() {
            // paired on an earlier run; later captures stay where they are
            log::debug!("keeping existing {}", to.display());
            report.screenshots.push(to);
            screenshot = Some(canonical);
        } else if let Some(original) = &segment.screenshot {
            let from = screenshots_dir.join(original);
            if move_or_copy(&from, &to)? {
                log::debug!("{} -> {}", from.display(), to.display());
                report.screenshots.push(to);
                screenshot = Some(canonical);
            } else {
                warning(format!(
                    "Screenshot {} vanished before it could be renamed",
                    from.display()
                ));
            }
        }

        index.push(SegmentIndexEntry {
            post_id: segment.post_id,
            gaze_file,
            sample_count: segment.points.len(),
            screenshot,
        });
    }

    let index_path = out_dir.join(format!("{participant}_posts_index.json"));
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;
    report.index = Some(index_path);

    Ok(report)
}
