use chrono::Duration;

use crate::models::{TimeRecord, Timecard};

/// A closed shift with its computed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub record: TimeRecord,
    pub duration: Duration,
}

/// Per-shift durations and their total for a whole timecard
///
/// A shift still in progress is reported in `open` and contributes nothing
/// to `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub project_name: String,
    /// Closed shifts in stored order
    pub entries: Vec<EntrySummary>,
    pub total: Duration,
    pub open: Option<TimeRecord>,
}

/// The most recent shift next to the running project total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSummary {
    pub shift: TimeRecord,
    pub shift_duration: Duration,
    pub total: Duration,
}

impl Summary {
    pub fn from_timecard(timecard: &Timecard) -> Self {
        let entries: Vec<EntrySummary> = timecard
            .entries
            .iter()
            .filter_map(|record| {
                record.duration().map(|duration| EntrySummary {
                    record: record.clone(),
                    duration,
                })
            })
            .collect();

        let total = entries
            .iter()
            .fold(Duration::zero(), |acc, entry| acc + entry.duration);

        Self {
            project_name: timecard.project_name.clone(),
            entries,
            total,
            open: timecard.open_entry.clone(),
        }
    }

    /// The last closed shift against the total, if any shift has closed
    pub fn last_shift(&self) -> Option<ShiftSummary> {
        self.entries.last().map(|last| ShiftSummary {
            shift: last.record.clone(),
            shift_duration: last.duration,
            total: self.total,
        })
    }
}
