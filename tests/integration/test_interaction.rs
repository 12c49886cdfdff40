//! End-to-end drag interaction flows through the controller.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use weekgrid::{
    Appointment, AppointmentSink, Config, GridCell, HitTarget, InteractionController,
    PointerEvent, TimeRange,
};

/// Records every proposal the engine emits.
#[derive(Default)]
struct RecordingSink {
    created: Vec<TimeRange>,
    updated: Vec<(String, TimeRange)>,
}

impl AppointmentSink for RecordingSink {
    fn create_appointment(&mut self, start: NaiveDateTime, end: NaiveDateTime) {
        self.created.push(TimeRange::new(start, end));
    }

    fn update_appointment(&mut self, id: &str, start: NaiveDateTime, end: NaiveDateTime) {
        self.updated.push((id.to_string(), TimeRange::new(start, end)));
    }
}

/// A test config whose 60px rows make pixel offsets read as minutes.
fn test_config() -> Config {
    let mut config = Config::default();
    config.grid.slot_height_px = 60.0;
    config
}

fn controller() -> InteractionController<RecordingSink> {
    InteractionController::new(RecordingSink::default(), &test_config())
}

// 2026-03-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap()
}

fn down(day: NaiveDate, hour: u32, minute: u32, hit: HitTarget) -> PointerEvent {
    PointerEvent::Down {
        cell: GridCell::new(day, hour),
        offset_y: minute as f32,
        hit,
    }
}

fn drag_to(day: NaiveDate, hour: u32, minute: u32) -> PointerEvent {
    PointerEvent::Move {
        cell: GridCell::new(day, hour),
        offset_y: minute as f32,
    }
}

fn appointment(id: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Appointment {
    Appointment::with_id(id, "checkup", at(day, start.0, start.1), at(day, end.0, end.1))
}

#[test]
fn short_selection_commits_default_length() {
    // Drag-select Monday 14:00 -> 14:05; 5 minutes is under the minimum.
    let mut controller = controller();
    controller.handle_event(down(monday(), 14, 0, HitTarget::Empty), &[]);
    controller.handle_event(drag_to(monday(), 14, 5), &[]);
    controller.handle_event(PointerEvent::Up, &[]);

    let created = &controller.sink().created;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].start, at(monday(), 14, 0));
    assert_eq!(created[0].end, at(monday(), 14, 30));
}

#[test]
fn reversed_selection_commits_normalized() {
    // Drag upward from 09:30 to 09:10.
    let mut controller = controller();
    controller.handle_event(down(monday(), 9, 30, HitTarget::Empty), &[]);
    controller.handle_event(drag_to(monday(), 9, 10), &[]);
    controller.handle_event(PointerEvent::Up, &[]);

    let created = &controller.sink().created;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].start, at(monday(), 9, 10));
    assert_eq!(created[0].end, at(monday(), 9, 30));
}

#[test]
fn top_resize_clamps_to_minimum_gap() {
    // Resize the top edge of 11:00-12:00 down to 11:50.
    let appointments = [appointment("a1", monday(), (11, 0), (12, 0))];
    let mut controller = controller();
    controller.handle_event(
        down(monday(), 11, 0, HitTarget::ResizeHandleTop("a1".to_string())),
        &appointments,
    );
    controller.handle_event(drag_to(monday(), 11, 50), &appointments);
    controller.handle_event(PointerEvent::Up, &appointments);

    let updated = &controller.sink().updated;
    assert_eq!(updated.len(), 1);
    let (id, range) = &updated[0];
    assert_eq!(id, "a1");
    assert_eq!(range.start, at(monday(), 11, 45));
    assert_eq!(range.end, at(monday(), 12, 0));
}

#[test]
fn move_to_other_day_preserves_duration() {
    // Move Monday 09:00-09:30 to Tuesday 15:20.
    let appointments = [appointment("a1", monday(), (9, 0), (9, 30))];
    let mut controller = controller();
    controller.handle_event(
        down(monday(), 9, 0, HitTarget::AppointmentBody("a1".to_string())),
        &appointments,
    );
    controller.handle_event(drag_to(tuesday(), 15, 20), &appointments);
    controller.handle_event(PointerEvent::Up, &appointments);

    let updated = &controller.sink().updated;
    assert_eq!(updated.len(), 1);
    let (_, range) = &updated[0];
    assert_eq!(range.start, at(tuesday(), 15, 20));
    assert_eq!(range.end, at(tuesday(), 15, 50));
}

#[test]
fn cross_hour_selection_previews_two_rows() {
    // Selecting 10:40 -> 11:20 draws in rows 10 and 11 only.
    let mut controller = controller();
    controller.handle_event(down(monday(), 10, 40, HitTarget::Empty), &[]);
    controller.handle_event(drag_to(monday(), 11, 20), &[]);

    let first = controller.preview_for(GridCell::new(monday(), 10)).unwrap();
    assert!((first.top_percent - 66.7).abs() < 0.1);
    assert!((first.height_percent - 33.3).abs() < 0.1);

    let last = controller.preview_for(GridCell::new(monday(), 11)).unwrap();
    assert_eq!(last.top_percent, 0.0);
    assert!((last.height_percent - 33.3).abs() < 0.1);

    assert!(controller.preview_for(GridCell::new(monday(), 9)).is_none());
    assert!(controller
        .preview_for(GridCell::new(tuesday(), 10))
        .is_none());
}

#[test]
fn selection_is_locked_to_anchor_day() {
    let mut controller = controller();
    controller.handle_event(down(monday(), 14, 0, HitTarget::Empty), &[]);
    controller.handle_event(drag_to(tuesday(), 16, 30), &[]);
    controller.handle_event(PointerEvent::Up, &[]);

    let created = &controller.sink().created;
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].start.date(), monday());
    assert_eq!(created[0].end.date(), monday());
}

#[test]
fn pointer_leave_commits_and_resets() {
    let mut controller = controller();
    controller.handle_event(down(monday(), 14, 0, HitTarget::Empty), &[]);
    controller.handle_event(drag_to(monday(), 15, 0), &[]);
    controller.handle_event(PointerEvent::Leave, &[]);

    assert!(!controller.is_dragging());
    assert_eq!(controller.sink().created.len(), 1);

    // The next pointer-down starts a fresh session.
    controller.handle_event(down(monday(), 10, 0, HitTarget::Empty), &[]);
    assert!(controller.is_dragging());
}

#[test]
fn move_emits_one_update_per_pointer_move() {
    let appointments = [appointment("a1", monday(), (9, 0), (9, 30))];
    let mut controller = controller();
    controller.handle_event(
        down(monday(), 9, 0, HitTarget::AppointmentBody("a1".to_string())),
        &appointments,
    );
    for minute in [10, 20, 30, 40, 50] {
        controller.handle_event(drag_to(monday(), 10, minute), &appointments);
    }
    controller.handle_event(PointerEvent::Up, &appointments);

    assert_eq!(controller.sink().updated.len(), 5);
    assert!(controller.sink().created.is_empty());
}

#[test]
fn every_short_selection_yields_thirty_minutes() {
    for minute in 0..15 {
        let mut controller = controller();
        controller.handle_event(down(monday(), 13, 0, HitTarget::Empty), &[]);
        controller.handle_event(drag_to(monday(), 13, minute), &[]);
        controller.handle_event(PointerEvent::Up, &[]);

        let created = &controller.sink().created;
        assert_eq!(created[0].start, at(monday(), 13, 0));
        assert_eq!(created[0].duration_minutes(), 30, "drag of {minute}min");
    }
}

#[test]
fn resize_never_inverts_edges() {
    let appointments = [appointment("a1", monday(), (11, 0), (12, 0))];

    // Sweep the bottom handle across the whole day, including far above the
    // start; every emitted range keeps at least the minimum gap.
    let mut controller = controller();
    controller.handle_event(
        down(monday(), 12, 0, HitTarget::ResizeHandleBottom("a1".to_string())),
        &appointments,
    );
    for hour in 8..18 {
        for minute in [0, 15, 30, 45] {
            controller.handle_event(drag_to(monday(), hour, minute), &appointments);
        }
    }
    controller.handle_event(PointerEvent::Up, &appointments);

    for (_, range) in &controller.sink().updated {
        assert!(range.end > range.start);
        assert!(range.duration_minutes() >= 15);
    }
}

#[test]
fn move_preserves_duration_everywhere() {
    let appointments = [appointment("a1", monday(), (9, 10), (10, 25))];
    let original = Duration::minutes(75);

    let mut controller = controller();
    controller.handle_event(
        down(monday(), 9, 10, HitTarget::AppointmentBody("a1".to_string())),
        &appointments,
    );
    for (day, hour, minute) in [
        (monday(), 8, 0),
        (monday(), 17, 59),
        (tuesday(), 12, 30),
        (tuesday(), 8, 1),
    ] {
        controller.handle_event(drag_to(day, hour, minute), &appointments);
    }
    controller.handle_event(PointerEvent::Up, &appointments);

    for (_, range) in &controller.sink().updated {
        assert_eq!(range.end - range.start, original);
    }
}

#[test]
fn update_still_emitted_for_vanished_appointment() {
    // The appointment disappears from the snapshot mid-drag; the engine
    // keeps proposing and lets the host decide what to do with the id.
    let appointments = [appointment("a1", monday(), (9, 0), (9, 30))];
    let mut controller = controller();
    controller.handle_event(
        down(monday(), 9, 0, HitTarget::AppointmentBody("a1".to_string())),
        &appointments,
    );
    controller.handle_event(drag_to(monday(), 11, 0), &[]);

    let updated = &controller.sink().updated;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "a1");
    assert_eq!(updated[0].1.duration_minutes(), 30);
}
