//! Snapshot parsing and static layout against the public API.

use chrono::NaiveDate;

use weekgrid::{
    appointments_in_cell, parse_snapshot, AppointmentRecord, AppointmentStatus, ClientRef,
    ColorPalette, GridCell, PetRef, WeekNavigator,
};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn record(id: &str, appointment_type: &str, start: &str, end: &str) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        start_time: Some(start.to_string()),
        end_time: Some(end.to_string()),
        appointment_type: appointment_type.to_string(),
        status: AppointmentStatus::Scheduled,
        client: Some(ClientRef {
            id: "c1".to_string(),
            name: "J. Okafor".to_string(),
        }),
        pet: Some(PetRef {
            id: "p1".to_string(),
            name: "Biscuit".to_string(),
            species: Some("dog".to_string()),
        }),
    }
}

#[test]
fn snapshot_to_cell_rectangles() {
    let records = vec![
        record("a", "checkup", "2026-03-02T09:00:00", "2026-03-02T09:30:00"),
        record("b", "surgery", "2026-03-02T09:45:00", "2026-03-02T11:00:00"),
        record("c", "dental", "2026-03-03T09:00:00", "2026-03-03T09:30:00"),
    ];

    let appointments = parse_snapshot(&records);
    let placed = appointments_in_cell(&appointments, GridCell::new(monday(), 9));

    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].appointment.id, "a");
    assert!((placed[0].geometry.top_percent - 0.0).abs() < 0.01);
    assert!((placed[0].geometry.height_percent - 50.0).abs() < 0.01);

    // 75 minutes starting at :45 overflows the row.
    assert_eq!(placed[1].appointment.id, "b");
    assert!((placed[1].geometry.top_percent - 75.0).abs() < 0.01);
    assert!(placed[1].geometry.height_percent > 100.0);
}

#[test]
fn malformed_rows_never_fail_the_render() {
    let mut records = vec![
        record("ok", "checkup", "2026-03-02T09:00:00", "2026-03-02T09:30:00"),
        record("bad", "checkup", "garbage", "2026-03-02T09:30:00"),
    ];
    records.push(AppointmentRecord {
        start_time: None,
        ..record("missing", "checkup", "", "")
    });

    let appointments = parse_snapshot(&records);
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].id, "ok");
    assert_eq!(appointments[0].client.as_ref().unwrap().name, "J. Okafor");
}

#[test]
fn snapshot_rows_round_trip_through_json() {
    let record = record("a", "checkup", "2026-03-02T09:00:00", "2026-03-02T09:30:00");
    let json = serde_json::to_string(&record).unwrap();
    let back: AppointmentRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, "a");
    assert_eq!(back.pet.unwrap().name, "Biscuit");
}

#[test]
fn palette_resolves_types_from_snapshot() {
    let palette = ColorPalette::default();
    let records = vec![
        record("a", "surgery", "2026-03-02T09:00:00", "2026-03-02T10:00:00"),
        record("b", "house-call", "2026-03-02T10:00:00", "2026-03-02T11:00:00"),
    ];

    let appointments = parse_snapshot(&records);
    assert_eq!(palette.token_for(&appointments[0].appointment_type), "rose");
    assert_eq!(palette.token_for(&appointments[1].appointment_type), "slate");
}

#[test]
fn navigator_frames_the_visible_week() {
    let nav = WeekNavigator::new(
        NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        chrono::Weekday::Mon,
    );
    let days = nav.days();
    assert_eq!(days[0], monday());
    assert_eq!(days.len(), 7);

    // A cell address pairs one of those days with an hour row.
    let cell = GridCell::new(days[3], 14);
    assert_eq!(cell.day, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
}
