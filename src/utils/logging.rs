//! Diagnostic logging setup. User-facing status lines go through
//! `ui::messages`; everything else goes through the `log` facade.

use env_logger::Env;

/// Map `-v` occurrences to a default filter; `RUST_LOG` still wins.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(default_filter(verbosity));
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
