//! Error types for the weekgrid scheduling engine.
//!
//! The drag core itself has no fatal states: invalid pointer input clamps,
//! malformed appointments are skipped, and too-short ranges are extended.
//! Errors exist only at the edges where the engine meets the host, i.e.
//! configuration loading and snapshot parsing.

use thiserror::Error;

/// Main error type for weekgrid operations.
#[derive(Error, Debug)]
pub enum WeekgridError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Appointment error: {0}")]
    Appointment(#[from] AppointmentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors raised while parsing appointments out of a host snapshot.
#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment {0} has no start time")]
    MissingStart(String),

    #[error("Appointment {0} has no end time")]
    MissingEnd(String),

    #[error("Unparseable timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Appointment {0} ends at or before its start")]
    EmptyRange(String),
}

/// Result type alias for weekgrid operations.
pub type Result<T> = std::result::Result<T, WeekgridError>;
