use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clean::CleanLogic;
use crate::errors::AppResult;
use crate::export::confirm;
use crate::ui::messages::{info, success};
use crate::utils::path::ParticipantLayout;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clean {
        participant,
        all,
        force,
    } = cmd
    {
        let layout = ParticipantLayout::new(&cfg.data_path(), participant)?;

        if *all {
            let question = format!(
                "This deletes {} including raw recordings.",
                layout.root.display()
            );
            if !*force && !confirm(&question)? {
                info("Nothing deleted.");
                return Ok(());
            }
            if CleanLogic::clean_all(&layout)? {
                success(format!("Removed all data of {participant}"));
            } else {
                info(format!("No data directory for {participant}"));
            }
            return Ok(());
        }

        let count = CleanLogic::clean_processed(&layout)?;
        success(format!("Removed {count} processed file(s) of {participant}"));
    }
    Ok(())
}
