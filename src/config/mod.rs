use crate::global;
use crate::meeting::{Clock, Meeting, MeetingError, MeetingResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub meeting: MeetingConfig,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    /// Accept meetings at or before the current time (default: false).
    pub allow_past_meetings: bool,
}

impl MeetingConfig {
    /// Builds a meeting from `text`, refusing ones that are not after
    /// `clock.now()` unless past meetings are allowed.
    pub fn admit(&self, text: &str, clock: &dyn Clock) -> MeetingResult<Meeting> {
        let meeting = Meeting::new(text)?;
        if !self.allow_past_meetings && !meeting.is_after(clock.now()) {
            debug!("Rejected meeting {:?}: not after current time", text);
            return Err(MeetingError::NotInFuture);
        }
        Ok(meeting)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Reads the config at `config_path`, writing defaults there first if
    /// the file does not exist.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        Self::load_from(config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_default_rejects_past_meetings() {
        let config = Config::default();
        assert!(!config.meeting.allow_past_meetings);
    }

    #[test]
    fn test_admit_future_meeting() {
        let config = MeetingConfig::default();
        let meeting = config.admit("2024-01-05 14:31", &clock()).unwrap();
        assert_eq!(meeting.value(), "2024-01-05 14:31");
    }

    #[test]
    fn test_admit_rejects_now_and_past() {
        let config = MeetingConfig::default();
        assert_eq!(
            config.admit("2024-01-05 14:30", &clock()).unwrap_err(),
            MeetingError::NotInFuture
        );
        let err = config.admit("2023-06-01 09:00", &clock()).unwrap_err();
        assert_eq!(err.to_string(), "Meeting MUST be AFTER the current day and time.");
    }

    #[test]
    fn test_admit_allows_past_when_configured() {
        let config = MeetingConfig {
            allow_past_meetings: true,
        };
        assert!(config.admit("2023-06-01 09:00", &clock()).is_ok());
    }

    #[test]
    fn test_admit_reports_format_before_time() {
        let config = MeetingConfig::default();
        assert_eq!(
            config.admit("2023-02-29 09:00", &clock()).unwrap_err(),
            MeetingError::InvalidFormat
        );
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.meeting.allow_past_meetings);

        let config: Config = toml::from_str("[meeting]\nallow_past_meetings = true\n").unwrap();
        assert!(config.meeting.allow_past_meetings);
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.meeting.allow_past_meetings = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.meeting.allow_past_meetings);
    }

    #[test]
    fn test_load_or_create_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clientbook").join("config.toml");
        assert!(!path.exists());

        let config = Config::load_or_create(&path).unwrap();
        assert!(!config.meeting.allow_past_meetings);
        assert!(path.exists());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("allow_past_meetings = false"));
    }

    #[test]
    fn test_load_or_create_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[meeting]\nallow_past_meetings = true\n").unwrap();

        let config = Config::load_or_create(&path).unwrap();
        assert!(config.meeting.allow_past_meetings);

        let unchanged = std::fs::read_to_string(&path).unwrap();
        assert_eq!(unchanged, "[meeting]\nallow_past_meetings = true\n");
    }

    #[test]
    fn test_load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[meeting\nallow_past_meetings = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
