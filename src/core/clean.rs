use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::ParticipantLayout;
use std::fs;

pub struct CleanLogic;

impl CleanLogic {
    /// Remove what `process` and `match` produced. Raw data, post
    /// metadata and screenshots stay. Returns the number of files removed.
    pub fn clean_processed(layout: &ParticipantLayout) -> AppResult<usize> {
        let mut count = 0;

        let clean = layout.clean_gaze();
        if clean.exists() {
            fs::remove_file(&clean)?;
            info(format!("Deleted: {}", clean.display()));
            count += 1;
        }

        let posts_dir = layout.gaze_posts_dir();
        if posts_dir.exists() {
            let files = fs::read_dir(&posts_dir)?.count();
            fs::remove_dir_all(&posts_dir)?;
            info(format!(
                "Deleted directory: {} ({} files)",
                posts_dir.display(),
                files
            ));
            count += files;
        }

        Ok(count)
    }

    /// Remove the whole participant directory. Returns false if it was not there.
    pub fn clean_all(layout: &ParticipantLayout) -> AppResult<bool> {
        if !layout.root.exists() {
            return Ok(false);
        }
        fs::remove_dir_all(&layout.root)?;
        info(format!("Deleted directory: {}", layout.root.display()));
        Ok(true)
    }
}
