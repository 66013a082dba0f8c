use crate::cli::parser::{Commands, screen_size};
use crate::config::Config;
use crate::core::process::ProcessLogic;
use crate::errors::AppResult;
use crate::utils::path::ParticipantLayout;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        participant,
        width,
        height,
    } = cmd
    {
        let (w, h) = screen_size(*width, *height, cfg)?;
        let layout = ParticipantLayout::new(&cfg.data_path(), participant)?;
        ProcessLogic::process(&layout, w, h).map_err(|e| e.for_participant(participant))?;
    }
    Ok(())
}
