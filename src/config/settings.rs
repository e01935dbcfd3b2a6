//! User settings for ledgerscope
//!
//! Holds the values the engine treats as configuration rather than
//! constants: the budget tier thresholds, the recent-entry window, the
//! trend depth, and the reporting timezone offset.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Thresholds;

/// User settings for ledgerscope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Utilization at or above this tier is a warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Utilization at or above this tier is over budget
    #[serde(default = "default_over_threshold")]
    pub over_threshold: f64,

    /// How many entries the recent-transactions view shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// How many trailing months the spending trend covers
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,

    /// Reporting timezone as an offset from UTC, in minutes
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Currency symbol used in rendered reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_warning_threshold() -> f64 {
    0.75
}

fn default_over_threshold() -> f64 {
    0.90
}

fn default_recent_limit() -> usize {
    5
}

fn default_trend_months() -> u32 {
    6
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            warning_threshold: default_warning_threshold(),
            over_threshold: default_over_threshold(),
            recent_limit: default_recent_limit(),
            trend_months: default_trend_months(),
            utc_offset_minutes: 0,
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// The budget tier thresholds as the evaluator consumes them
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.warning_threshold, self.over_threshold)
    }

    /// Convert an explicit UTC instant into the reporting calendar date
    ///
    /// All engine entry points take dates; this is the one place an
    /// instant becomes a date, shifted by the configured offset.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        (now + Duration::minutes(self.utc_offset_minutes as i64)).date_naive()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.warning_threshold.is_finite() || !self.over_threshold.is_finite() {
            return Err(LedgerError::Config(
                "Thresholds must be finite numbers".into(),
            ));
        }
        if self.warning_threshold <= 0.0 {
            return Err(LedgerError::Config(format!(
                "Warning threshold must be positive, got {}",
                self.warning_threshold
            )));
        }
        if self.warning_threshold >= self.over_threshold {
            return Err(LedgerError::Config(format!(
                "Warning threshold {} must be below over threshold {}",
                self.warning_threshold, self.over_threshold
            )));
        }
        if self.utc_offset_minutes.abs() > 18 * 60 {
            return Err(LedgerError::Config(format!(
                "UTC offset {} minutes is out of range",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.warning_threshold, 0.75);
        assert_eq!(settings.over_threshold, 0.90);
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.trend_months, 6);
        assert_eq!(settings.utc_offset_minutes, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_thresholds_carrier() {
        let settings = Settings {
            warning_threshold: 0.5,
            over_threshold: 0.8,
            ..Settings::default()
        };
        let thresholds = settings.thresholds();
        assert_eq!(thresholds.warning, 0.5);
        assert_eq!(thresholds.over, 0.8);
    }

    #[test]
    fn test_today_with_offset() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();

        let utc = Settings::default();
        assert_eq!(
            utc.today(now),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );

        // East of UTC it is already February
        let east = Settings {
            utc_offset_minutes: 60,
            ..Settings::default()
        };
        assert_eq!(
            east.today(now),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );

        // Far enough west it is still the previous day
        let west = Settings {
            utc_offset_minutes: -8 * 60,
            ..Settings::default()
        };
        let morning = Utc.with_ymd_and_hms(2025, 2, 1, 5, 0, 0).unwrap();
        assert_eq!(
            west.today(morning),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let inverted = Settings {
            warning_threshold: 0.95,
            over_threshold: 0.90,
            ..Settings::default()
        };
        assert!(inverted.validate().is_err());

        let negative = Settings {
            warning_threshold: -0.1,
            ..Settings::default()
        };
        assert!(negative.validate().is_err());

        let absurd_offset = Settings {
            utc_offset_minutes: 20 * 60,
            ..Settings::default()
        };
        assert!(absurd_offset.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.recent_limit = 10;
        settings.currency_symbol = "€".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_limit, 10);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_limit, 5);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"recent_limit": 3}"#).unwrap();
        assert_eq!(settings.recent_limit, 3);
        assert_eq!(settings.warning_threshold, 0.75);
        assert_eq!(settings.over_threshold, 0.90);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(
            paths.settings_file(),
            r#"{"warning_threshold": 0.95, "over_threshold": 0.9}"#,
        )
        .unwrap();
        assert!(Settings::load_or_create(&paths).is_err());
    }
}
