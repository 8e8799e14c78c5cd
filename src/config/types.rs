use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::TIMECARD_FILE_NAME;

/// Contents of an optional timecard.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project name shown in reports (defaults to the working directory name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Timecard document location, relative to the config file's directory
    #[serde(default = "default_timecard_file")]
    pub timecard_file: PathBuf,
}

/// Fully resolved settings handed to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub project_name: String,
    pub storage_path: PathBuf,
}

fn default_timecard_file() -> PathBuf {
    PathBuf::from(TIMECARD_FILE_NAME)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: None,
            timecard_file: default_timecard_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.project_name, None);
        assert_eq!(config.timecard_file, PathBuf::from("timecard.json"));
    }

    #[test]
    fn test_config_empty_toml_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.project_name, None);
        assert_eq!(parsed.timecard_file, PathBuf::from("timecard.json"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            project_name: Some("billing".to_string()),
            timecard_file: PathBuf::from("hours/billing.json"),
        };
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.project_name.as_deref(), Some("billing"));
        assert_eq!(parsed.timecard_file, PathBuf::from("hours/billing.json"));
    }
}
