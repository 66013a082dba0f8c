use crate::core::reconstruct::reconstruct;
use crate::errors::AppResult;
use crate::export::write_cleaned_samples;
use crate::import::read_raw_samples;
use crate::models::CleanedSample;
use crate::ui::messages::{info, warning};
use crate::utils::path::ParticipantLayout;

pub struct ProcessLogic;

impl ProcessLogic {
    /// Stage A: `gaze.csv` → `gaze_clean.csv`.
    ///
    /// Returns the cleaned trace so a caller can hand it straight to the
    /// matcher without re-reading the file.
    pub fn process(
        layout: &ParticipantLayout,
        width: u32,
        height: u32,
    ) -> AppResult<Vec<CleanedSample>> {
        let raw_path = layout.raw_gaze();
        ParticipantLayout::require(&raw_path)?;

        info(format!(
            "Reconstructing {} at {}x{}",
            raw_path.display(),
            width,
            height
        ));

        let raw = read_raw_samples(&raw_path)?;
        if raw.is_empty() {
            warning(format!("{} contains no samples", raw_path.display()));
        }

        let cleaned = reconstruct(&raw, width, height).map_err(|e| e.at_path(&raw_path))?;
        let trailing = cleaned.iter().rev().take_while(|s| s.is_missing()).count();
        log::info!(
            "{}: {} raw ({} binocular) → {} cleaned sample(s), {} trailing without gaze",
            layout.name,
            raw.len(),
            raw.iter().filter(|r| r.is_binocular()).count(),
            cleaned.len(),
            trailing
        );

        let out = layout.clean_gaze();
        write_cleaned_samples(&out, &cleaned)?;
        crate::export::notify_written("Cleaned gaze", &out);

        Ok(cleaned)
    }
}
