use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One shift, bounded by a clock-in and (once closed) a clock-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    /// Local calendar date of the clock-in
    pub date: NaiveDate,
    /// When the shift started
    pub start_time: DateTime<Utc>,
    /// When the shift ended; absent while the shift is open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Free-text notes on what was worked on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<String>,
}

impl TimeRecord {
    /// Start a new open shift. The date is taken from the local calendar.
    pub fn open(start_time: DateTime<Utc>) -> Self {
        Self {
            date: start_time.with_timezone(&Local).date_naive(),
            start_time,
            end_time: None,
            tasks: Vec::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed time in whole seconds, or `None` while the shift is open.
    ///
    /// Sub-second precision is truncated, never rounded up.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time
            .map(|end| Duration::seconds((end - self.start_time).num_seconds()))
    }
}
