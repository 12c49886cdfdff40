//! The pointer-event state machine driving appointment create, move, and
//! resize.
//!
//! The machine is a pure function [`transition`] over an explicit
//! [`DragSession`], so every interaction path is testable without a rendering
//! framework. [`InteractionController`] owns the session, feeds events
//! through the machine, and delivers the resulting effects to the host's
//! [`AppointmentSink`].
//!
//! Hit classification is the rendering layer's job: pointer events arrive
//! with a [`HitTarget`] already attached, and this module never touches
//! toolkit APIs.
//!
//! Create commits once, on release, because an in-progress selection has no
//! appointment identity yet. Move and resize emit one update per
//! pointer-move so the host's optimistic UI tracks the cursor; batching, if
//! any, is the host's optimization.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, warn};

use crate::config::Config;
use crate::metrics::get_metrics;

use super::grid::{self, CellGeometry};
use super::preview::{self, Selection};
use super::types::{Appointment, GridCell, GridPos, TimeRange};

// ============================================================================
// Events
// ============================================================================

/// Classification of the element under the pointer, computed by the
/// rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty grid background.
    Empty,
    /// The body of an existing appointment.
    AppointmentBody(String),
    /// The top resize handle of an existing appointment.
    ResizeHandleTop(String),
    /// The bottom resize handle of an existing appointment.
    ResizeHandleBottom(String),
}

/// A pointer event over the grid, in cell-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down {
        cell: GridCell,
        offset_y: f32,
        hit: HitTarget,
    },
    Move {
        cell: GridCell,
        offset_y: f32,
    },
    Up,
    /// The pointer left the grid. Handled identically to `Up` so no session
    /// is ever left dangling.
    Leave,
}

// ============================================================================
// Session State
// ============================================================================

/// Which edge of an appointment a resize drag grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Bottom,
}

/// The single in-progress pointer interaction.
///
/// Exactly one session exists at a time. It is created on pointer-down and
/// destroyed, committed or discarded, on pointer-up or pointer-leave.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSession {
    Idle,
    /// A create drag, locked to the day it began on.
    Selecting(Selection),
    /// An existing appointment tracking the cursor. The original duration is
    /// captured at pointer-down so updates stay computable even if the
    /// appointment drops out of the host snapshot mid-drag.
    Moving {
        appointment_id: String,
        grab_offset_minutes: i64,
        duration_minutes: i64,
    },
    /// One edge of an appointment tracking the cursor; `anchor` is the fixed
    /// opposite edge, captured at pointer-down.
    Resizing {
        appointment_id: String,
        edge: ResizeEdge,
        anchor: NaiveDateTime,
    },
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        !matches!(self, DragSession::Idle)
    }
}

// ============================================================================
// Effects
// ============================================================================

/// A proposal the machine asks the controller to deliver to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Commit of a finished selection.
    CreateAppointment { range: TimeRange },
    /// Live update during a move or resize drag.
    UpdateAppointment { id: String, range: TimeRange },
}

/// Inputs the machine needs besides the event itself.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    /// Read-only appointment snapshot from the host.
    pub appointments: &'a [Appointment],
    /// Rendered height of one hour row in pixels.
    pub cell_height: f32,
    /// Shortest range a resize may produce.
    pub min_duration_minutes: i64,
    /// Duration given to a committed selection under the minimum.
    pub default_duration_minutes: i64,
}

// ============================================================================
// The State Machine
// ============================================================================

/// Advance the session by one pointer event.
///
/// Pure: the new session and the effects to deliver are the only outputs.
/// A pointer-down while a session is active is ignored rather than starting
/// a nested session.
pub fn transition(
    session: DragSession,
    event: &PointerEvent,
    ctx: &TransitionContext<'_>,
) -> (DragSession, Vec<Effect>) {
    match (session, event) {
        (DragSession::Idle, PointerEvent::Down { cell, offset_y, hit }) => {
            let minute = grid::pixel_to_minute(*offset_y, ctx.cell_height);
            start_session(*cell, minute, hit, ctx)
        }

        (DragSession::Selecting(mut selection), PointerEvent::Move { cell, offset_y }) => {
            // The selection stays locked to the day it began on.
            if cell.day == selection.day {
                selection.end_hour = cell.hour;
                selection.end_minute = grid::pixel_to_minute(*offset_y, ctx.cell_height);
            }
            (DragSession::Selecting(selection), Vec::new())
        }

        (
            DragSession::Moving {
                appointment_id,
                grab_offset_minutes,
                duration_minutes,
            },
            PointerEvent::Move { cell, offset_y },
        ) => {
            // Keep the grabbed point under the cursor.
            let minute = grid::pixel_to_minute(*offset_y, ctx.cell_height) as i64;
            let start_minute = (minute - grab_offset_minutes).clamp(0, 59) as u32;
            let start = GridPos::new(cell.day, cell.hour, start_minute).time();
            let end = start + Duration::minutes(duration_minutes);

            let effect = Effect::UpdateAppointment {
                id: appointment_id.clone(),
                range: TimeRange::new(start, end),
            };
            (
                DragSession::Moving {
                    appointment_id,
                    grab_offset_minutes,
                    duration_minutes,
                },
                vec![effect],
            )
        }

        (
            DragSession::Resizing {
                appointment_id,
                edge,
                anchor,
            },
            PointerEvent::Move { cell, offset_y },
        ) => {
            let minute = grid::pixel_to_minute(*offset_y, ctx.cell_height);
            let candidate = GridPos::new(cell.day, cell.hour, minute).time();
            let min_gap = Duration::minutes(ctx.min_duration_minutes);

            // The dragged edge never comes within the minimum gap of the
            // fixed one.
            let range = match edge {
                ResizeEdge::Top => TimeRange::new(candidate.min(anchor - min_gap), anchor),
                ResizeEdge::Bottom => TimeRange::new(anchor, candidate.max(anchor + min_gap)),
            };

            let effect = Effect::UpdateAppointment {
                id: appointment_id.clone(),
                range,
            };
            (
                DragSession::Resizing {
                    appointment_id,
                    edge,
                    anchor,
                },
                vec![effect],
            )
        }

        (DragSession::Selecting(selection), PointerEvent::Up | PointerEvent::Leave) => {
            (DragSession::Idle, vec![commit_selection(&selection, ctx)])
        }

        (
            DragSession::Moving { .. } | DragSession::Resizing { .. },
            PointerEvent::Up | PointerEvent::Leave,
        ) => {
            // Updates were already emitted live; nothing further to send.
            (DragSession::Idle, Vec::new())
        }

        // Nested pointer-down: the host's hit-testing should prevent this,
        // but never start a second session.
        (active, PointerEvent::Down { .. }) if active.is_active() => (active, Vec::new()),

        (session, _) => (session, Vec::new()),
    }
}

/// Open the session matching the hit classification of a pointer-down.
fn start_session(
    cell: GridCell,
    minute: u32,
    hit: &HitTarget,
    ctx: &TransitionContext<'_>,
) -> (DragSession, Vec<Effect>) {
    let session = match hit {
        HitTarget::Empty => DragSession::Selecting(Selection::anchored(cell.day, cell.hour, minute)),

        HitTarget::AppointmentBody(id) => match find_appointment(ctx.appointments, id) {
            Some(appointment) => DragSession::Moving {
                appointment_id: id.clone(),
                grab_offset_minutes: minute as i64 - appointment.start_minute() as i64,
                duration_minutes: appointment.duration_minutes(),
            },
            None => DragSession::Idle,
        },

        HitTarget::ResizeHandleTop(id) => match find_appointment(ctx.appointments, id) {
            Some(appointment) => DragSession::Resizing {
                appointment_id: id.clone(),
                edge: ResizeEdge::Top,
                anchor: appointment.end_time,
            },
            None => DragSession::Idle,
        },

        HitTarget::ResizeHandleBottom(id) => match find_appointment(ctx.appointments, id) {
            Some(appointment) => DragSession::Resizing {
                appointment_id: id.clone(),
                edge: ResizeEdge::Bottom,
                anchor: appointment.start_time,
            },
            None => DragSession::Idle,
        },
    };

    (session, Vec::new())
}

/// Turn a finished selection into a create proposal.
///
/// The range is normalized so start precedes end; an accidental sub-minimum
/// drag becomes a default-length appointment at the drag start.
fn commit_selection(selection: &Selection, ctx: &TransitionContext<'_>) -> Effect {
    let start = GridPos::new(selection.day, selection.start_hour, selection.start_minute).time();
    let end = GridPos::new(selection.day, selection.end_hour, selection.end_minute).time();

    let mut range = TimeRange::new(start, end).normalized();
    if range.duration_minutes() < ctx.min_duration_minutes {
        range.end = range.start + Duration::minutes(ctx.default_duration_minutes);
    }

    Effect::CreateAppointment { range }
}

fn find_appointment<'a>(appointments: &'a [Appointment], id: &str) -> Option<&'a Appointment> {
    let found = appointments.iter().find(|a| a.id == id);
    if found.is_none() {
        debug!("Pointer-down hit appointment {id} missing from snapshot");
    }
    found
}

// ============================================================================
// Host Interface
// ============================================================================

/// The persistence collaborator's callbacks.
///
/// Fire-and-forget: the engine never observes persistence results and
/// performs no rollback. An update may reference an id the host has already
/// removed; whether that is a no-op is the host's decision.
pub trait AppointmentSink {
    /// Called once, on commit of a create selection.
    fn create_appointment(&mut self, start: NaiveDateTime, end: NaiveDateTime);
    /// Called once per pointer-move during a move or resize drag.
    fn update_appointment(&mut self, id: &str, start: NaiveDateTime, end: NaiveDateTime);
}

// ============================================================================
// Controller
// ============================================================================

/// Owns the drag session and wires the state machine to the host.
pub struct InteractionController<S: AppointmentSink> {
    sink: S,
    session: DragSession,
    cell_height: f32,
    min_duration_minutes: i64,
    default_duration_minutes: i64,
}

impl<S: AppointmentSink> InteractionController<S> {
    /// Create a controller delivering proposals to `sink`.
    pub fn new(sink: S, config: &Config) -> Self {
        Self {
            sink,
            session: DragSession::Idle,
            cell_height: config.grid.slot_height_px,
            min_duration_minutes: config.timing.min_duration_minutes,
            default_duration_minutes: config.timing.default_duration_minutes,
        }
    }

    /// The current drag session.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// The host sink, for inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Preview rectangle the given cell should draw for an in-progress
    /// selection, if any.
    pub fn preview_for(&self, cell: GridCell) -> Option<CellGeometry> {
        match &self.session {
            DragSession::Selecting(selection) => preview::selection_rect(selection, cell),
            _ => None,
        }
    }

    /// Feed one pointer event through the state machine and deliver the
    /// resulting proposals to the host.
    pub fn handle_event(&mut self, event: PointerEvent, appointments: &[Appointment]) {
        let metrics = get_metrics();

        if self.session.is_active() && matches!(event, PointerEvent::Down { .. }) {
            warn!("Ignoring pointer-down while a drag session is active");
        }

        let ctx = TransitionContext {
            appointments,
            cell_height: self.cell_height,
            min_duration_minutes: self.min_duration_minutes,
            default_duration_minutes: self.default_duration_minutes,
        };

        let was_active = self.session.is_active();
        let previous = std::mem::replace(&mut self.session, DragSession::Idle);
        let (next, effects) = transition(previous, &event, &ctx);
        self.session = next;

        if !was_active && self.session.is_active() {
            metrics.drag_sessions_started_total.inc();
            metrics.active_drag_session.set(1);
            debug!("Drag session started: {:?}", self.session);
        } else if was_active && !self.session.is_active() {
            metrics.active_drag_session.set(0);
            debug!("Drag session ended");
        }

        for effect in effects {
            match effect {
                Effect::CreateAppointment { range } => {
                    metrics.appointments_created_total.inc();
                    debug!("Proposing create: {} -> {}", range.start, range.end);
                    self.sink.create_appointment(range.start, range.end);
                }
                Effect::UpdateAppointment { id, range } => {
                    metrics.appointment_updates_emitted_total.inc();
                    self.sink.update_appointment(&id, range.start, range.end);
                }
            }
        }
    }
}
