// src/export/mod.rs

mod csv;
mod fs_utils;
mod model;
mod segments;

pub use self::csv::{write_cleaned_samples, write_raw_samples, write_segment};
pub use fs_utils::{confirm, move_or_copy};
pub use model::SegmentIndexEntry;
pub use segments::{EmitReport, emit_segments};

use crate::ui::messages::success;
use std::path::Path;

/// Shared "file written" status line.
pub(crate) fn notify_written(label: &str, path: &Path) {
    success(format!("{label} written: {}", path.display()));
}
