//! Configuration module
//!
//! Resolves the project name and timecard location from an optional
//! timecard.toml and the working directory. Defines Config and EngineConfig.

mod types;

pub use types::{Config, EngineConfig};

use crate::error::{Result, TimecardError};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "timecard.toml";

/// Default timecard document name
pub const TIMECARD_FILE_NAME: &str = "timecard.json";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TimecardError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Build the engine settings for `cwd`.
///
/// An explicit config path must exist. Without one, `cwd/timecard.toml` is
/// used when present and defaults apply otherwise.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<EngineConfig> {
    let (config, base) = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            let config = load(&path)?;
            let base = path.parent().unwrap_or(cwd).to_path_buf();
            (config, base)
        }
        None => {
            let implicit = cwd.join(CONFIG_FILE_NAME);
            let config = if implicit.is_file() {
                load(&implicit)?
            } else {
                Config::default()
            };
            (config, cwd.to_path_buf())
        }
    };

    let project_name = config.project_name.unwrap_or_else(|| {
        cwd.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "timecard".to_string())
    });

    Ok(EngineConfig {
        project_name,
        storage_path: base.join(&config.timecard_file),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_from_working_directory() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().join("my-project");
        fs::create_dir(&cwd).unwrap();

        let resolved = resolve(None, &cwd).unwrap();
        assert_eq!(resolved.project_name, "my-project");
        assert_eq!(resolved.storage_path, cwd.join("timecard.json"));
    }

    #[test]
    fn test_resolve_reads_implicit_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "project_name = \"billing\"\ntimecard_file = \"hours/billing.json\"\n",
        )
        .unwrap();

        let resolved = resolve(None, temp.path()).unwrap();
        assert_eq!(resolved.project_name, "billing");
        assert_eq!(
            resolved.storage_path,
            temp.path().join("hours/billing.json")
        );
    }

    #[test]
    fn test_resolve_explicit_config_is_relative_to_its_directory() {
        let temp = TempDir::new().unwrap();
        let conf_dir = temp.path().join("conf");
        fs::create_dir(&conf_dir).unwrap();
        fs::write(conf_dir.join("work.toml"), "timecard_file = \"work.json\"\n").unwrap();

        let resolved = resolve(Some(Path::new("conf/work.toml")), temp.path()).unwrap();
        assert_eq!(resolved.storage_path, conf_dir.join("work.json"));
    }

    #[test]
    fn test_resolve_missing_explicit_config() {
        let temp = TempDir::new().unwrap();
        let result = resolve(Some(Path::new("nope.toml")), temp.path());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Cannot read config"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "project_name = [").unwrap();

        assert!(matches!(load(&path), Err(TimecardError::TomlParse(_))));
    }
}
