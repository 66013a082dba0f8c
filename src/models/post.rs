use crate::utils::time::offset_by_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An interval of interest, as delivered by the experiment backend.
///
/// Start and end are seconds relative to `reference_wall_clock`
/// (`initialDate` in the metadata file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "postID")]
    pub post_id: i64,
    #[serde(rename = "PostStartTime")]
    pub start_time_seconds: f64,
    #[serde(rename = "PostEndTime")]
    pub end_time_seconds: f64,
    #[serde(rename = "initialDate")]
    pub reference_wall_clock: DateTime<Utc>,
    #[serde(rename = "userName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Post {
    /// Inclusive check against a sample time already aligned to the reference clock.
    pub fn contains_offset(&self, time_seconds: f64) -> bool {
        time_seconds >= self.start_time_seconds && time_seconds <= self.end_time_seconds
    }

    /// The post window in absolute wall-clock time; `None` if either bound
    /// falls outside the representable calendar.
    pub fn wall_clock_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((
            offset_by_seconds(self.reference_wall_clock, self.start_time_seconds)?,
            offset_by_seconds(self.reference_wall_clock, self.end_time_seconds)?,
        ))
    }

    /// A window that cannot be placed on the calendar contains nothing.
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        self.wall_clock_window()
            .is_some_and(|(start, end)| start <= instant && instant <= end)
    }

    pub fn belongs_to(&self, participant: &str) -> bool {
        self.user_name
            .as_deref()
            .map(|u| u.eq_ignore_ascii_case(participant))
            .unwrap_or(true)
    }
}
