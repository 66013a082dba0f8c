//! Formatting utilities used for CLI summaries.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// "3/4" style counter.
pub fn ratio(done: usize, total: usize) -> String {
    format!("{done}/{total}")
}
