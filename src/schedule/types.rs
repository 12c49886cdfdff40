//! Core types for the weekly schedule grid.
//!
//! Appointments are owned by the host's store; this engine reads a snapshot
//! per render and proposes new time ranges back through callbacks. The raw
//! snapshot row ([`AppointmentRecord`]) carries optional string timestamps
//! and is parsed defensively into an [`Appointment`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AppointmentError;

// ============================================================================
// Appointment Types
// ============================================================================

/// A scheduled clinic appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Appointment {
    /// Unique identifier for the appointment.
    pub id: String,
    /// Start of the appointment, in clinic wall-clock time.
    pub start_time: NaiveDateTime,
    /// End of the appointment, strictly after `start_time`.
    pub end_time: NaiveDateTime,
    /// Appointment type label, used for color-token lookup.
    pub appointment_type: String,
    /// Scheduling status.
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Display-only reference to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientRef>,
    /// Display-only reference to the pet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<PetRef>,
}

impl Appointment {
    /// Create a new appointment with a generated id.
    pub fn new(
        appointment_type: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), appointment_type, start_time, end_time)
    }

    /// Create an appointment with a specific id.
    pub fn with_id(
        id: impl Into<String>,
        appointment_type: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            appointment_type: appointment_type.into(),
            status: AppointmentStatus::default(),
            client: None,
            pet: None,
        }
    }

    /// Attach a client reference.
    pub fn with_client(mut self, client: ClientRef) -> Self {
        self.client = Some(client);
        self
    }

    /// Attach a pet reference.
    pub fn with_pet(mut self, pet: PetRef) -> Self {
        self.pet = Some(pet);
        self
    }

    /// Appointment duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Minute-of-hour at which the appointment starts.
    pub fn start_minute(&self) -> u32 {
        self.start_time.minute()
    }

    /// Whether the appointment starts inside the given grid cell.
    pub fn starts_in_cell(&self, cell: GridCell) -> bool {
        self.start_time.date() == cell.day && self.start_time.hour() == cell.hour
    }
}

/// Scheduling status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
    NoShow,
}

/// Display-only reference to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClientRef {
    pub id: String,
    pub name: String,
}

/// Display-only reference to a pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PetRef {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

// ============================================================================
// Snapshot Records
// ============================================================================

/// A raw appointment row as delivered by the host's data backend.
///
/// Timestamps arrive as optional strings; rows that fail to parse are
/// excluded from layout rather than failing the render.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AppointmentRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub appointment_type: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<PetRef>,
}

impl TryFrom<&AppointmentRecord> for Appointment {
    type Error = AppointmentError;

    fn try_from(record: &AppointmentRecord) -> Result<Self, Self::Error> {
        let start_raw = record
            .start_time
            .as_deref()
            .ok_or_else(|| AppointmentError::MissingStart(record.id.clone()))?;
        let end_raw = record
            .end_time
            .as_deref()
            .ok_or_else(|| AppointmentError::MissingEnd(record.id.clone()))?;

        let start_time = parse_timestamp(start_raw)?;
        let end_time = parse_timestamp(end_raw)?;

        if end_time <= start_time {
            return Err(AppointmentError::EmptyRange(record.id.clone()));
        }

        Ok(Appointment {
            id: record.id.clone(),
            start_time,
            end_time,
            appointment_type: record.appointment_type.clone(),
            status: record.status,
            client: record.client.clone(),
            pet: record.pet.clone(),
        })
    }
}

/// Parse a backend timestamp into clinic wall-clock time.
///
/// Accepts RFC 3339 (the offset is dropped, keeping the local wall-clock
/// reading) and bare `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` forms.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, AppointmentError> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.naive_local()),
        Err(source) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
            .map_err(|_| AppointmentError::Timestamp {
                value: value.to_string(),
                source,
            }),
    }
}

// ============================================================================
// Grid Addressing
// ============================================================================

/// One hour-by-one-day rectangle of the grid, the atomic unit of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct GridCell {
    pub day: NaiveDate,
    pub hour: u32,
}

impl GridCell {
    pub fn new(day: NaiveDate, hour: u32) -> Self {
        Self { day, hour }
    }
}

/// A minute-precise position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridPos {
    pub day: NaiveDate,
    pub hour: u32,
    pub minute: u32,
}

impl GridPos {
    pub fn new(day: NaiveDate, hour: u32, minute: u32) -> Self {
        Self { day, hour, minute }
    }

    /// The wall-clock time this position addresses. Out-of-range components
    /// clamp rather than panic.
    pub fn time(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or(NaiveTime::MIN);
        self.day.and_time(time)
    }
}

// ============================================================================
// Time Ranges
// ============================================================================

/// A proposed appointment time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Return the range ordered so that `start < end`, swapping if reversed.
    pub fn normalized(self) -> Self {
        if self.end < self.start {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    /// Range duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
