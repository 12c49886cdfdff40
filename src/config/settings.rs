//! Configuration settings for the weekgrid scheduling engine.

use crate::error::{ConfigError, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub week: WeekConfig,
    pub grid: GridConfig,
    pub timing: TimingConfig,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week: WeekConfig::default(),
            grid: GridConfig::default(),
            timing: TimingConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            // Current directory
            PathBuf::from("weekgrid.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("weekgrid/config.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".weekgrid/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.grid.slot_height_px <= 0.0 {
            return Err(ConfigError::Invalid("slot_height_px must be > 0".to_string()).into());
        }

        if self.grid.day_start_hour >= self.grid.day_end_hour {
            return Err(ConfigError::Invalid(
                "day_start_hour must be before day_end_hour".to_string(),
            )
            .into());
        }

        if self.grid.day_end_hour > 24 {
            return Err(ConfigError::Invalid("day_end_hour must be <= 24".to_string()).into());
        }

        if self.timing.min_duration_minutes == 0 {
            return Err(
                ConfigError::Invalid("min_duration_minutes must be > 0".to_string()).into(),
            );
        }

        if self.timing.default_duration_minutes < self.timing.min_duration_minutes {
            return Err(ConfigError::Invalid(
                "default_duration_minutes must be >= min_duration_minutes".to_string(),
            )
            .into());
        }

        if self.palette.default_token.is_empty() {
            return Err(ConfigError::MissingField("palette.default_token".to_string()).into());
        }

        Ok(())
    }
}

/// Week layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekConfig {
    /// First day of the displayed week.
    pub starts_on: StartOfWeek,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            starts_on: StartOfWeek::Monday,
        }
    }
}

/// First day of the week, as configured for the clinic's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOfWeek {
    #[default]
    Monday,
    Sunday,
    Saturday,
}

impl StartOfWeek {
    /// The chrono weekday this setting maps to.
    pub fn weekday(self) -> Weekday {
        match self {
            StartOfWeek::Monday => Weekday::Mon,
            StartOfWeek::Sunday => Weekday::Sun,
            StartOfWeek::Saturday => Weekday::Sat,
        }
    }
}

/// Grid geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First hour row displayed (inclusive).
    pub day_start_hour: u32,
    /// Last hour row displayed (exclusive).
    pub day_end_hour: u32,
    /// Rendered height of one hour row in pixels.
    pub slot_height_px: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 8,
            day_end_hour: 18,
            slot_height_px: 48.0,
        }
    }
}

/// Timing rules for drag commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Shortest range a resize may produce, and the threshold below which
    /// a committed selection is considered accidental.
    pub min_duration_minutes: i64,
    /// Duration given to a committed selection that fell under the minimum.
    pub default_duration_minutes: i64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_duration_minutes: 15,
            default_duration_minutes: 30,
        }
    }
}

/// Appointment-type to color-token mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Token used for appointment types not present in `tokens`.
    pub default_token: String,
    /// Per-type color tokens.
    pub tokens: HashMap<String, String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let tokens = [
            ("checkup", "emerald"),
            ("vaccination", "sky"),
            ("surgery", "rose"),
            ("dental", "violet"),
            ("grooming", "amber"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            default_token: "slate".to_string(),
            tokens,
        }
    }
}
