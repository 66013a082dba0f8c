use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept if it already exists)
///  - the data directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config_path();

    println!("⚙️  Initializing gazetrail…");
    let cfg = Config::init_all(&path, cli.data_dir.clone())?;

    println!("📄 Config file : {}", path.display());
    println!("🗂️  Data dir    : {}", cfg.data_path().display());
    println!("🖥️  Screen      : {}x{}", cfg.screen_width, cfg.screen_height);

    success("gazetrail initialization completed!");
    Ok(())
}
