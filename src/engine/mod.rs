//! Timecard state machine
//!
//! A timecard is either Closed (no shift in progress) or Open. Each
//! operation loads the document, checks and applies one transition in
//! memory, then saves. Nothing is written when a check fails.

mod clock;
mod summary;

pub use clock::{Clock, SystemClock};
pub use summary::{EntrySummary, ShiftSummary, Summary};

use crate::config::EngineConfig;
use crate::error::{Result, TimecardError};
use crate::models::{TimeRecord, Timecard};
use crate::store::TimecardStore;

/// Clock-in/clock-out operations over one project's timecard
pub struct TimecardEngine<C: Clock = SystemClock> {
    project_name: String,
    store: TimecardStore,
    clock: C,
}

impl TimecardEngine<SystemClock> {
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> TimecardEngine<C> {
    pub fn with_clock(config: &EngineConfig, clock: C) -> Self {
        Self {
            project_name: config.project_name.clone(),
            store: TimecardStore::new(&config.storage_path),
            clock,
        }
    }

    pub fn store(&self) -> &TimecardStore {
        &self.store
    }

    /// Write a new, empty timecard. Refuses to overwrite an existing one.
    pub fn create(&self) -> Result<Timecard> {
        if self.store.exists() {
            return Err(TimecardError::AlreadyExists(self.store.path().to_path_buf()));
        }

        let timecard = Timecard::new(self.project_name.clone());
        self.store.save(&timecard)?;
        Ok(timecard)
    }

    /// Start a shift now. Fails if one is already open.
    pub fn clock_in(&self) -> Result<TimeRecord> {
        let mut timecard = self.store.load()?;
        if timecard.is_open() {
            return Err(TimecardError::ClockInWhileOpen);
        }

        let record = TimeRecord::open(self.clock.now());
        timecard.open_entry = Some(record.clone());
        self.store.save(&timecard)?;
        Ok(record)
    }

    /// End the open shift now, attaching `tasks` to it.
    ///
    /// Returns the closed shift next to the new project total.
    pub fn clock_out(&self, tasks: Vec<String>) -> Result<ShiftSummary> {
        let mut timecard = self.store.load()?;
        let mut record = timecard
            .open_entry
            .take()
            .ok_or(TimecardError::ClockOutWithoutOpen)?;

        let end = self.clock.now();
        if end <= record.start_time {
            return Err(TimecardError::InvalidShift {
                start: record.start_time,
                end,
            });
        }
        record.end_time = Some(end);
        record.tasks = tasks;
        timecard.entries.push(record);

        self.store.save(&timecard)?;

        Summary::from_timecard(&timecard)
            .last_shift()
            .ok_or(TimecardError::ClockOutWithoutOpen)
    }

    /// Durations of every closed shift and their total. Read-only.
    pub fn summarize(&self) -> Result<Summary> {
        let timecard = self.store.load()?;
        Ok(Summary::from_timecard(&timecard))
    }

    /// The most recent closed shift against the running total
    pub fn last_shift(&self) -> Result<Option<ShiftSummary>> {
        Ok(self.summarize()?.last_shift())
    }
}
