//! Markdown renderer module
//!
//! Turns engine results and errors into Markdown for the terminal.
//! Times are shown in 24-hour form in the renderer's time zone.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::path::Path;

use crate::engine::{ShiftSummary, Summary};
use crate::error::TimecardError;
use crate::models::{DurationParts, TimeRecord};

/// Markdown renderer for timecard output
pub struct Renderer<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz: TimeZone> Renderer<Tz>
where
    Tz::Offset: fmt::Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Confirmation after `new`
    pub fn render_created(&self, path: &Path) -> String {
        let mut output = String::new();

        output.push_str("# TIMECARD\n\n");
        output.push_str(&format!("`{}`\n\n", path.display()));
        output.push_str("You have created a new timecard file.\n\n");
        output.push_str("**Tip:** Use the `clockin` and `clockout` commands to record your time.");

        output
    }

    /// Confirmation after `clockin`
    pub fn render_clock_in(&self, record: &TimeRecord) -> String {
        format!(
            "**TIMECARD** You have **clocked in:** {}",
            self.time(record.start_time)
        )
    }

    /// Confirmation after `clockout`, with the shift and project totals
    pub fn render_clock_out(&self, shift: &ShiftSummary) -> String {
        let mut output = String::new();

        if let Some(end) = shift.shift.end_time {
            output.push_str(&format!(
                "**TIMECARD** You have **clocked out:** {}\n\n",
                self.time(end)
            ));
        }
        output.push_str(&format!(
            "**Total Shift Time:** {}\n\n",
            DurationParts::from(shift.shift_duration)
        ));
        output.push_str(&format!(
            "**Total Project Time:** {}",
            DurationParts::from(shift.total)
        ));

        output
    }

    /// Full report for `print`
    pub fn render_summary(&self, summary: &Summary) -> String {
        let mut output = String::new();

        output.push_str("# TIMECARD Logged Hours\n\n");
        output.push_str(&format!("Project: {}\n\n", summary.project_name));
        output.push_str("---\n\n");

        if summary.entries.is_empty() && summary.open.is_none() {
            output.push_str("*No shifts recorded yet.*\n\n");
        }

        for entry in &summary.entries {
            output.push_str(&self.render_entry(&entry.record));
            output.push_str(&format!(" [{}]\n\n", DurationParts::from(entry.duration)));
            output.push_str(&self.render_tasks(&entry.record.tasks));
        }

        if let Some(open) = &summary.open {
            output.push_str(&self.render_entry(open));
            output.push_str(" *in progress*\n\n");
        }

        output.push_str("---\n\n");
        output.push_str(&self.render_total(summary));

        output
    }

    /// Error headline plus a recovery tip where there is one
    pub fn render_error(&self, err: &TimecardError) -> String {
        let mut output = format!("**TIMECARD ERROR** {}", err);

        if let Some(tip) = tip_for(err) {
            output.push_str("\n\n**Tip:** ");
            output.push_str(tip);
        }

        output
    }

    fn render_entry(&self, record: &TimeRecord) -> String {
        let end = record
            .end_time
            .map(|end| self.time(end))
            .unwrap_or_default();

        format!(
            "**{}** `{} - {}`",
            record.date.format("%Y-%m-%d"),
            self.time(record.start_time),
            end
        )
    }

    fn render_tasks(&self, tasks: &[String]) -> String {
        let mut output = String::new();

        for task in tasks {
            output.push_str(&format!("- {}\n", task));
        }
        if !tasks.is_empty() {
            output.push('\n');
        }

        output
    }

    fn render_total(&self, summary: &Summary) -> String {
        let total = DurationParts::from(summary.total);

        format!(
            "**Total Time:** {}\n\n{} Hours {} Minutes {} Seconds",
            total, total.hours, total.minutes, total.seconds
        )
    }

    fn time(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.tz).format("%H:%M:%S").to_string()
    }
}

fn tip_for(err: &TimecardError) -> Option<&'static str> {
    match err {
        TimecardError::ClockInWhileOpen => Some(
            "Clock out with the `clockout` command, or edit the timecard file manually.",
        ),
        TimecardError::ClockOutWithoutOpen => Some(
            "Clock in with the `clockin` command, or edit the timecard file manually.",
        ),
        TimecardError::AlreadyExists(_) => Some(
            "Remove or rename the existing file to start over, or keep using it with `clockin`.",
        ),
        TimecardError::NotFound(_) => {
            Some("Set up a timecard for this project with the `new` command.")
        }
        TimecardError::CorruptDocument { .. } => {
            Some("Fix the timecard file by hand; it is left exactly as it was.")
        }
        _ => None,
    }
}
