//! End-to-end booking workflow against the real widget state machine: open
//! the selector, navigate, pick a slot, apply or cancel, and hand the result
//! to an appointment request. Uses the live clock the way the app does, so
//! picks target a far-future date where every slot is open.

use chrono::{Datelike, Duration, Local, NaiveDate};

use salonbook::models::{CreateAppointmentRequest, Role};
use salonbook::picker::{DateTimePicker, PickerEvent, PickerMessage, PickerParams, SlotWindow};
use salonbook::ui_state::View;

/// A date far enough out that no availability gate applies.
fn future_date() -> NaiveDate {
    Local::now().date_naive() + Duration::days(30)
}

fn open_picker() -> DateTimePicker {
    let params =
        PickerParams::new(SlotWindow::default()).with_min_date(Local::now().date_naive());
    DateTimePicker::open(&params, None)
}

/// Page the calendar forward until it shows `target`'s month.
fn go_to_month(picker: &mut DateTimePicker, target: NaiveDate) {
    let today = Local::now().date_naive();
    let months_ahead =
        (target.year() - today.year()) * 12 + target.month() as i32 - today.month() as i32;
    for _ in 0..months_ahead {
        assert!(picker.update(PickerMessage::NextMonth).is_none());
    }
}

#[test]
fn booking_flow_produces_a_valid_request() {
    let target = future_date();
    let mut picker = open_picker();

    go_to_month(&mut picker, target);
    match picker.update(PickerMessage::DayPicked(target)) {
        Some(PickerEvent::Changed(_)) => {}
        other => panic!("day pick should preview, got {:?}", other),
    }

    // Pick 10:30; the commit closes the dropdown and previews again
    assert!(picker.update(PickerMessage::ToggleTimeEntry).is_none());
    assert!(picker.update(PickerMessage::HourPicked(10)).is_none());
    match picker.update(PickerMessage::MinutePicked(30)) {
        Some(PickerEvent::Changed(_)) => {}
        other => panic!("minute pick should commit and preview, got {:?}", other),
    }

    let timestamp = match picker.update(PickerMessage::Apply) {
        Some(PickerEvent::Applied(ts)) => ts,
        other => panic!("expected Applied, got {:?}", other),
    };
    assert!(timestamp.contains("T10:30:00"));

    let request = CreateAppointmentRequest {
        client_id: 7,
        service_id: 3,
        staff_id: None,
        scheduled_at: timestamp,
        notes: Some("trim and style".to_string()),
    };
    assert!(request.validate().is_ok());
}

#[test]
fn cancel_discards_every_navigation_and_pick() {
    let target = future_date();
    let mut picker = open_picker();
    let opened = picker.selected_date();

    go_to_month(&mut picker, target);
    picker.update(PickerMessage::DayPicked(target));
    picker.update(PickerMessage::ToggleTimeEntry);
    picker.update(PickerMessage::HourPicked(15));
    picker.update(PickerMessage::MinutePicked(45));

    assert_eq!(
        picker.update(PickerMessage::Cancel),
        Some(PickerEvent::Canceled)
    );
    assert_eq!(picker.selected_date(), opened);
}

#[test]
fn clicks_below_the_booking_floor_do_nothing() {
    let mut picker = open_picker();
    let yesterday = Local::now().date_naive() - Duration::days(1);
    assert!(picker.update(PickerMessage::DayPicked(yesterday)).is_none());
    assert_ne!(picker.selected_date(), yesterday);
}

#[test]
fn hour_alone_is_never_applied() {
    let target = future_date();
    let mut picker = open_picker();
    go_to_month(&mut picker, target);
    picker.update(PickerMessage::DayPicked(target));

    let before = picker
        .update(PickerMessage::Apply)
        .and_then(|event| match event {
            PickerEvent::Applied(ts) => Some(ts),
            _ => None,
        })
        .unwrap();

    // A lone hour pick leaves the committed value alone
    picker.update(PickerMessage::ToggleTimeEntry);
    picker.update(PickerMessage::HourPicked(15));
    let after = picker
        .update(PickerMessage::Apply)
        .and_then(|event| match event {
            PickerEvent::Applied(ts) => Some(ts),
            _ => None,
        })
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn navigation_tables_gate_management_views() {
    assert!(Role::Stylist.can_access(View::Appointments));
    assert!(!Role::Stylist.can_access(View::Services));
    assert!(Role::Receptionist.can_access(View::Clients));
    assert!(!Role::Receptionist.can_access(View::Services));
    assert!(Role::Admin
        .accessible_views()
        .contains(&View::Services));
}
