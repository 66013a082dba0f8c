/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Step outcome color:
/// all succeeded → green
/// none succeeded → red
/// otherwise → yellow
pub fn color_for_outcome(succeeded: usize, total: usize) -> &'static str {
    if total == 0 {
        GREY
    } else if succeeded == total {
        GREEN
    } else if succeeded == 0 {
        RED
    } else {
        YELLOW
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
