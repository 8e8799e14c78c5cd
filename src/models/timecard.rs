use serde::{Deserialize, Serialize};

use super::record::TimeRecord;

/// The persisted timecard for one project
///
/// Closed shifts live in `entries` in chronological order. The shift in
/// progress, if any, is held apart in `open_entry` until it is clocked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timecard {
    /// Project the hours are logged against
    pub project_name: String,
    /// Closed shifts, oldest first
    pub entries: Vec<TimeRecord>,
    /// Shift currently in progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_entry: Option<TimeRecord>,
}

impl Timecard {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            entries: Vec::new(),
            open_entry: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_entry.is_some()
    }

    /// Bring a freshly parsed document into canonical shape and check it.
    ///
    /// Older files kept the open shift as the last element of `entries`;
    /// that element is moved into `open_entry`. Any other open or inverted
    /// entry is rejected with a description of the problem.
    pub fn normalize(mut self) -> std::result::Result<Self, String> {
        if self.entries.last().is_some_and(TimeRecord::is_open) {
            if self.open_entry.is_some() {
                return Err("more than one open entry".to_string());
            }
            self.open_entry = self.entries.pop();
        }

        for (index, entry) in self.entries.iter().enumerate() {
            match entry.end_time {
                None => return Err(format!("entry {} is open but not the latest", index)),
                Some(end) if end <= entry.start_time => {
                    return Err(format!("entry {} ends before it starts", index))
                }
                Some(_) => {}
            }
        }

        if let Some(open) = &self.open_entry {
            if !open.is_open() {
                return Err("openEntry has an endTime".to_string());
            }
        }

        Ok(self)
    }
}
