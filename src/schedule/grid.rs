//! Pixel/minute and time-range/geometry conversions for one hour row.
//!
//! All functions here are pure. Inputs outside the expected ranges clamp to
//! safe values, so callers never need to pre-validate pointer coordinates.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Render rectangle for one hour row, in percent of the row's box.
///
/// `height_percent` may exceed 100 for appointments that run past the end of
/// the hour; such appointments visually overflow into the row below. The
/// layout engine does not clip this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub top_percent: f32,
    pub height_percent: f32,
}

/// Convert a vertical pixel offset inside an hour cell to a minute of that
/// hour.
///
/// Rounds to the nearest minute and clamps to `[0, 59]`, so any real offset
/// (negative, beyond the cell, or from a degenerate cell height) yields a
/// valid minute.
pub fn pixel_to_minute(offset_y: f32, cell_height: f32) -> u32 {
    if cell_height <= 0.0 || !offset_y.is_finite() {
        return 0;
    }
    let minute = (offset_y / cell_height * 60.0).round();
    minute.clamp(0.0, 59.0) as u32
}

/// Compute the render rectangle of a time range within its starting hour row.
///
/// The top edge is the start's minute-of-hour as a fraction of the row; the
/// height is the full duration as a fraction of one hour, unclipped.
pub fn range_to_geometry(start: NaiveDateTime, end: NaiveDateTime) -> CellGeometry {
    let top_percent = start.minute() as f32 / 60.0 * 100.0;
    let duration_minutes = (end - start).num_minutes().max(0) as f32;
    let height_percent = duration_minutes / 60.0 * 100.0;

    CellGeometry {
        top_percent,
        height_percent,
    }
}
