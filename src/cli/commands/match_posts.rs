use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::match_posts::MatchLogic;
use crate::errors::AppResult;
use crate::ui::messages::detail;
use crate::utils::path::ParticipantLayout;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Match { participant } = cmd {
        let layout = ParticipantLayout::new(&cfg.data_path(), participant)?;
        let summary =
            MatchLogic::match_from_file(&layout).map_err(|e| e.for_participant(participant))?;
        detail(format!(
            "{} of {} post(s) matched, {} screenshot(s) paired",
            summary.segments, summary.posts, summary.screenshots
        ));
    }
    Ok(())
}
