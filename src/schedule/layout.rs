//! Static appointment layout for the week grid.
//!
//! For each grid cell the engine selects the appointments that start in it
//! and attaches their render geometry. Malformed snapshot rows are skipped.
//!
//! Overlapping appointments within one hour are not column-split: each gets
//! its plain absolutely-positioned rectangle and they visually collide. The
//! source system never resolved this and the behavior is preserved here.

use tracing::debug;

use crate::metrics::get_metrics;

use super::grid::{self, CellGeometry};
use super::types::{Appointment, AppointmentRecord, GridCell};

/// An appointment paired with its render rectangle inside one hour row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAppointment<'a> {
    pub appointment: &'a Appointment,
    pub geometry: CellGeometry,
}

/// Parse a raw host snapshot into appointments, dropping malformed rows.
///
/// Rows with missing or unparseable timestamps, or an empty time range, are
/// logged and counted but never fail the render.
pub fn parse_snapshot(records: &[AppointmentRecord]) -> Vec<Appointment> {
    records
        .iter()
        .filter_map(|record| match Appointment::try_from(record) {
            Ok(appointment) => Some(appointment),
            Err(err) => {
                debug!("Skipping malformed appointment record: {err}");
                get_metrics().malformed_appointments_skipped_total.inc();
                None
            }
        })
        .collect()
}

/// Select the appointments starting in `cell` and compute their rectangles.
///
/// Results are ordered by start time. Geometry is not clipped to the row:
/// appointments running past the end of the hour overflow into the row below.
pub fn appointments_in_cell<'a>(
    appointments: &'a [Appointment],
    cell: GridCell,
) -> Vec<PlacedAppointment<'a>> {
    let mut placed: Vec<PlacedAppointment<'a>> = appointments
        .iter()
        .filter(|a| a.starts_in_cell(cell))
        .map(|appointment| PlacedAppointment {
            appointment,
            geometry: grid::range_to_geometry(appointment.start_time, appointment.end_time),
        })
        .collect();

    placed.sort_by(|a, b| a.appointment.start_time.cmp(&b.appointment.start_time));
    placed
}
