//! Path utilities: expand ~ and resolve the per-participant directory layout.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Where every pipeline stage reads and writes for one participant:
///
/// ```text
/// <data_dir>/<name>/gaze.csv
/// <data_dir>/<name>/gaze_clean.csv
/// <data_dir>/<name>/times/<name>_posts_times.json
/// <data_dir>/<name>/screenshots/
/// <data_dir>/<name>/gaze_posts/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantLayout {
    pub name: String,
    pub root: PathBuf,
}

impl ParticipantLayout {
    pub fn new(data_dir: &Path, name: &str) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(AppError::InvalidArgument(format!(
                "participant name '{name}' must be a plain directory name"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            root: data_dir.join(name),
        })
    }

    pub fn raw_gaze(&self) -> PathBuf {
        self.root.join("gaze.csv")
    }

    pub fn clean_gaze(&self) -> PathBuf {
        self.root.join("gaze_clean.csv")
    }

    pub fn times_dir(&self) -> PathBuf {
        self.root.join("times")
    }

    pub fn posts_file(&self) -> PathBuf {
        self.times_dir().join(format!("{}_posts_times.json", self.name))
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join("screenshots")
    }

    pub fn gaze_posts_dir(&self) -> PathBuf {
        self.root.join("gaze_posts")
    }

    pub fn posts_index(&self) -> PathBuf {
        self.gaze_posts_dir().join(format!("{}_posts_index.json", self.name))
    }

    /// Fail with the missing path when an earlier stage has not produced `path`.
    pub fn require(path: &Path) -> AppResult<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(AppError::MissingPrerequisite(path.to_path_buf()))
        }
    }
}
