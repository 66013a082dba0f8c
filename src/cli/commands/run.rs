use crate::cli::parser::{Commands, screen_size};
use crate::config::Config;
use crate::core::batch::BatchLogic;
use crate::errors::AppResult;
use crate::ui::messages::detail;
use crate::utils::path::ParticipantLayout;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        participant,
        width,
        height,
    } = cmd
    {
        let (w, h) = screen_size(*width, *height, cfg)?;
        let layout = ParticipantLayout::new(&cfg.data_path(), participant)?;
        let summary =
            BatchLogic::run_one(&layout, w, h).map_err(|e| e.for_participant(participant))?;
        detail(format!(
            "{} of {} post(s) matched, {} screenshot(s) paired",
            summary.segments, summary.posts, summary.screenshots
        ));
    }
    Ok(())
}
