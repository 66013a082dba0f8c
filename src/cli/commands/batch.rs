use crate::cli::parser::{Commands, screen_size};
use crate::config::Config;
use crate::core::batch::{BatchLogic, BatchOptions, BatchReport};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_outcome, colorize};
use crate::utils::formatting::{bold, pad_right, ratio};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch {
        participants,
        steps,
        width,
        height,
        continue_on_error,
    } = cmd
    {
        let (w, h) = screen_size(*width, *height, cfg)?;
        let opts = BatchOptions {
            width: w,
            height: h,
            continue_on_error: *continue_on_error,
        };

        header("BATCH PROCESSING");
        println!("Participants: {}", participants.join(", "));
        println!(
            "Steps: {}",
            steps.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
        );
        println!("Resolution: {w}x{h}");

        let report = BatchLogic::run(&cfg.data_path(), participants, steps, &opts);
        print_summary(&report);

        let failed = report.total_failed();
        if failed > 0 {
            return Err(AppError::Other(format!("{failed} batch step(s) failed")));
        }
    }
    Ok(())
}

fn print_summary(report: &BatchReport) {
    header("BATCH PROCESSING COMPLETE");

    let width = report
        .participants
        .iter()
        .map(|p| p.participant.len())
        .max()
        .unwrap_or(0);

    for p in &report.participants {
        let ok = p.succeeded();
        let total = p.steps.len();
        println!(
            "{} {} steps succeeded",
            pad_right(&p.participant, width),
            colorize(&ratio(ok, total), color_for_outcome(ok, total))
        );
        for failed in p.steps.iter().filter_map(|s| s.error.as_ref().map(|e| (s.step, e))) {
            println!("    {} {}", failed.0.as_str(), failed.1);
        }
    }

    println!();
    println!(
        "{} {}",
        bold("Total steps succeeded:"),
        report.total_succeeded()
    );
    println!("{} {}", bold("Total steps failed:"), report.total_failed());
}
