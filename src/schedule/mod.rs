//! The weekly time-grid scheduling engine.
//!
//! This module turns raw pointer input over a 7-day/hourly grid into
//! appointment create, move, and resize proposals:
//!
//! - **Week navigation**: the 7 visible calendar days around a reference date
//! - **Grid math**: pixel offsets to wall-clock minutes, time ranges to
//!   per-row render rectangles
//! - **Static layout**: per-cell appointment selection and geometry
//! - **Live preview**: per-row rectangles for an in-progress selection
//! - **Interaction**: the pointer-event state machine and host callbacks
//!
//! # Architecture
//!
//! ```text
//! pointer events ──► InteractionController ──► AppointmentSink (host)
//!                        │         │
//!                        ▼         ▼
//!                  grid math   preview rects
//!
//! host snapshot ──► layout ──► per-cell rectangles ──► rendering layer
//! ```
//!
//! Everything below the controller is pure; the controller's single
//! `DragSession` is the only mutable state in the engine.

pub mod commands;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod palette;
pub mod preview;
pub mod types;
pub mod week;

pub use commands::{CommandDispatcher, ScheduleCommands};
pub use grid::{pixel_to_minute, range_to_geometry, CellGeometry};
pub use interaction::{
    AppointmentSink, DragSession, Effect, HitTarget, InteractionController, PointerEvent,
    ResizeEdge, TransitionContext,
};
pub use layout::{appointments_in_cell, parse_snapshot, PlacedAppointment};
pub use palette::ColorPalette;
pub use preview::{selection_rect, Selection};
pub use types::{
    Appointment, AppointmentRecord, AppointmentStatus, ClientRef, GridCell, GridPos, PetRef,
    TimeRange,
};
pub use week::WeekNavigator;
