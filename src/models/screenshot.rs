use chrono::{DateTime, Utc};

/// A screen capture found on disk; the capture time comes from its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub filename: String,
    pub captured_at: DateTime<Utc>,
}
