//! Live preview rectangles for an in-progress create selection.
//!
//! A selection anchored in one hour row and dragged into another must draw a
//! rectangle in every spanned row. This module rasterizes the selection into
//! per-row geometry; the host paints whatever comes back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::grid::CellGeometry;
use super::types::GridCell;

/// Smallest rendered height, so a near-zero drag is still visible.
const MIN_HEIGHT_PERCENT: f32 = 5.0;

/// An in-progress create selection: the anchor cell plus the current pointer
/// position, locked to the day the drag began on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub day: NaiveDate,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl Selection {
    /// Anchor a new selection at a single point.
    pub fn anchored(day: NaiveDate, hour: u32, minute: u32) -> Self {
        Self {
            day,
            start_hour: hour,
            start_minute: minute,
            end_hour: hour,
            end_minute: minute,
        }
    }
}

/// Compute the preview rectangle the given hour row should draw for this
/// selection, or `None` if the row is outside the selection.
pub fn selection_rect(selection: &Selection, cell: GridCell) -> Option<CellGeometry> {
    if cell.day != selection.day {
        return None;
    }

    let lo_hour = selection.start_hour.min(selection.end_hour);
    let hi_hour = selection.start_hour.max(selection.end_hour);
    if cell.hour < lo_hour || cell.hour > hi_hour {
        return None;
    }

    // Minute at the earlier and later hour edge of the selection. Within a
    // single row the minutes themselves may be reversed.
    let (lo_minute, hi_minute) = if selection.start_hour <= selection.end_hour {
        (selection.start_minute, selection.end_minute)
    } else {
        (selection.end_minute, selection.start_minute)
    };

    let (top, height) = if lo_hour == hi_hour {
        let top = lo_minute.min(hi_minute);
        let span = lo_minute.abs_diff(hi_minute);
        (minute_percent(top), minute_percent(span))
    } else if cell.hour == lo_hour {
        // First spanned row: fill from the edge minute to the bottom.
        (minute_percent(lo_minute), minute_percent(60 - lo_minute))
    } else if cell.hour == hi_hour {
        // Last spanned row: fill from the top down to the edge minute.
        (0.0, minute_percent(hi_minute))
    } else {
        // Fully spanned middle row.
        (0.0, 100.0)
    };

    Some(CellGeometry {
        top_percent: top,
        height_percent: height.max(MIN_HEIGHT_PERCENT),
    })
}

fn minute_percent(minute: u32) -> f32 {
    minute as f32 / 60.0 * 100.0
}
