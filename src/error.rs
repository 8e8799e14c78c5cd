use std::path::PathBuf;
use thiserror::Error;

/// Timecard error types
#[derive(Error, Debug)]
pub enum TimecardError {
    #[error("A timecard already exists at '{}'", .0.display())]
    AlreadyExists(PathBuf),

    #[error("No timecard found at '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("You must clock out before clocking in")]
    ClockInWhileOpen,

    #[error("You must clock in before clocking out")]
    ClockOutWithoutOpen,

    #[error("Clock-out time {end} is not after clock-in time {start}")]
    InvalidShift {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    #[error("Timecard at '{}' is corrupt: {reason}", .path.display())]
    CorruptDocument { path: PathBuf, reason: String },

    #[error("Failed to write timecard to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl TimecardError {
    /// True for mistakes the user fixes by running a different command,
    /// as opposed to storage faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TimecardError::AlreadyExists(_)
                | TimecardError::NotFound(_)
                | TimecardError::ClockInWhileOpen
                | TimecardError::ClockOutWithoutOpen
        )
    }
}

/// Result type for Timecard operations
pub type Result<T> = std::result::Result<T, TimecardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_already_exists() {
        let err = TimecardError::AlreadyExists(PathBuf::from("/tmp/timecard.json"));
        assert_eq!(
            err.to_string(),
            "A timecard already exists at '/tmp/timecard.json'"
        );
    }

    #[test]
    fn test_error_display_state_machine() {
        assert_eq!(
            TimecardError::ClockInWhileOpen.to_string(),
            "You must clock out before clocking in"
        );
        assert_eq!(
            TimecardError::ClockOutWithoutOpen.to_string(),
            "You must clock in before clocking out"
        );
    }

    #[test]
    fn test_error_display_corrupt() {
        let err = TimecardError::CorruptDocument {
            path: PathBuf::from("timecard.json"),
            reason: "missing field `entries`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Timecard at 'timecard.json' is corrupt: missing field `entries`"
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(TimecardError::ClockInWhileOpen.is_user_error());
        assert!(TimecardError::NotFound(PathBuf::from("x")).is_user_error());
        assert!(!TimecardError::Config("bad".to_string()).is_user_error());
    }
}
