//! Weekgrid: weekly time-grid scheduling engine for clinic operations.
//!
//! Converts pointer input over a 7-day/hourly grid into geometrically and
//! temporally consistent appointment create, move, and resize proposals,
//! delivered to the host's store through callbacks. Business validity
//! (provider availability, double-booking policy) is out of scope here.

pub mod config;
pub mod error;
pub mod metrics;
pub mod schedule;

pub use config::{Config, GridConfig, PaletteConfig, StartOfWeek, TimingConfig, WeekConfig};
pub use error::{AppointmentError, ConfigError, Result, WeekgridError};
pub use metrics::{get_metrics, Metrics, MetricsSnapshot};
pub use schedule::{
    appointments_in_cell, parse_snapshot, pixel_to_minute, range_to_geometry, selection_rect,
    Appointment, AppointmentRecord, AppointmentSink, AppointmentStatus, CellGeometry, ClientRef,
    ColorPalette, CommandDispatcher, DragSession, Effect, GridCell, GridPos, HitTarget,
    InteractionController, PetRef, PlacedAppointment, PointerEvent, ResizeEdge, ScheduleCommands,
    Selection, TimeRange, TransitionContext, WeekNavigator,
};
