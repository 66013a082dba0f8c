use crate::core::matcher::match_posts;
use crate::errors::AppResult;
use crate::export::{EmitReport, emit_segments};
use crate::import::{load_posts, read_cleaned_samples, scan_screenshots};
use crate::models::CleanedSample;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::ParticipantLayout;

/// Outcome of a matching run, for summaries.
#[derive(Debug, Default)]
pub struct MatchSummary {
    pub posts: usize,
    pub segments: usize,
    pub samples: usize,
    pub screenshots: usize,
    pub emitted: EmitReport,
}

pub struct MatchLogic;

impl MatchLogic {
    /// Stage B from disk: reads `gaze_clean.csv`.
    pub fn match_from_file(layout: &ParticipantLayout) -> AppResult<MatchSummary> {
        let clean_path = layout.clean_gaze();
        ParticipantLayout::require(&clean_path)?;
        let samples = read_cleaned_samples(&clean_path)?;
        Self::match_samples(layout, &samples)
    }

    /// Stage B on an in-memory trace.
    pub fn match_samples(
        layout: &ParticipantLayout,
        samples: &[CleanedSample],
    ) -> AppResult<MatchSummary> {
        let posts_path = layout.posts_file();
        let posts = load_posts(&posts_path, Some(&layout.name))?;
        let screenshots = scan_screenshots(&layout.screenshots_dir())?;

        info(format!(
            "Matching {} sample(s) against {} post(s) and {} screenshot(s)",
            samples.len(),
            posts.len(),
            screenshots.len()
        ));

        let segments = match_posts(samples, &posts, &screenshots);
        if segments.is_empty() {
            warning(format!("No post received any gaze sample for {}", layout.name));
        }

        let emitted = emit_segments(
            &layout.name,
            &segments,
            &layout.gaze_posts_dir(),
            &layout.screenshots_dir(),
        )?;

        let summary = MatchSummary {
            posts: posts.len(),
            segments: segments.len(),
            samples: segments.iter().map(|s| s.points.len()).sum(),
            screenshots: emitted.screenshots.len(),
            emitted,
        };

        success(format!(
            "{} segment(s) with {} sample(s) written to {}",
            summary.segments,
            summary.samples,
            layout.gaze_posts_dir().display()
        ));

        Ok(summary)
    }
}
