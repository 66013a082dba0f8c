use crate::core::batch::PipelineStep;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for gazetrail
#[derive(Parser)]
#[command(
    name = "gazetrail",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean binocular gaze recordings and split them into per-post segments",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (one sub-directory per participant)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use this configuration file instead of ~/.gazetrail/gazetrail.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the data directory
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Reconstruct raw gaze data: gaze.csv → gaze_clean.csv
    Process {
        /// Participant name (directory under the data dir)
        participant: String,

        #[arg(long, help = "Screen width in pixels (default from config)")]
        width: Option<u32>,

        #[arg(long, help = "Screen height in pixels (default from config)")]
        height: Option<u32>,
    },

    /// Split gaze_clean.csv into per-post files and pair screenshots
    Match {
        /// Participant name (directory under the data dir)
        participant: String,
    },

    /// Process then match one participant in a single pass
    Run {
        participant: String,

        #[arg(long, help = "Screen width in pixels (default from config)")]
        width: Option<u32>,

        #[arg(long, help = "Screen height in pixels (default from config)")]
        height: Option<u32>,
    },

    /// Run pipeline steps for several participants
    Batch {
        #[arg(long = "participants", short = 'p', num_args = 1.., required = true)]
        participants: Vec<String>,

        #[arg(long = "steps", short = 's', value_enum, num_args = 1.., required = true)]
        steps: Vec<PipelineStep>,

        #[arg(long, help = "Screen width in pixels (default from config)")]
        width: Option<u32>,

        #[arg(long, help = "Screen height in pixels (default from config)")]
        height: Option<u32>,

        #[arg(long = "continue-on-error", help = "Keep going after a failed step")]
        continue_on_error: bool,
    },

    /// Delete processed outputs of a participant
    Clean {
        participant: String,

        #[arg(long, help = "Delete the whole participant directory, raw data included")]
        all: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },
}

impl Cli {
    /// Config file in effect: `--config` or the per-user default.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.config
            .as_deref()
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(crate::config::Config::config_file)
    }
}

/// Resolve a screen size from flags and config; zero is rejected.
pub fn screen_size(
    width: Option<u32>,
    height: Option<u32>,
    cfg: &crate::config::Config,
) -> crate::errors::AppResult<(u32, u32)> {
    let w = width.unwrap_or(cfg.screen_width);
    let h = height.unwrap_or(cfg.screen_height);
    if w == 0 || h == 0 {
        return Err(crate::errors::AppError::InvalidArgument(format!(
            "screen size must be positive, got {w}x{h}"
        )));
    }
    Ok((w, h))
}
