//! Readers for the files exchanged between pipeline stages.

mod csv;
mod posts;
mod screenshots;

pub use self::csv::{read_cleaned_samples, read_raw_samples, read_segment};
pub use posts::load_posts;
pub use screenshots::{parse_screenshot_name, scan_screenshots};
