// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Ask the user for a yes/no confirmation. Anything but y/yes is a no.
pub fn confirm(question: &str) -> AppResult<bool> {
    warning(question);

    print!("Continue? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}

/// Try to move a file from `from` to `to`.
/// - If source does not exist → no-op, returns false
/// - Otherwise, try `rename`, on failure → `copy` + remove original.
///
/// An existing target is replaced.
pub fn move_or_copy(from: &Path, to: &Path) -> io::Result<bool> {
    if !from.exists() {
        return Ok(false);
    }

    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
        let _ = fs::remove_file(from);
    }

    Ok(true)
}
