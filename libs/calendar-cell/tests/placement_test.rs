// libs/calendar-cell/tests/placement_test.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use calendar_cell::models::{CalendarView, ScheduleSettings};
use calendar_cell::services::placement::{place_events, MONTH_VISIBLE_EVENT_CAP};
use calendar_cell::services::slots::generate_time_slots;
use shared_models::{CalendarEvent, EventKind};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn default_settings() -> ScheduleSettings {
    ScheduleSettings {
        interval_minutes: 60,
        day_start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        day_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        buffer_minutes: 0,
    }
}

fn event_at(start: &str, title: &str) -> CalendarEvent {
    let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M:%S").unwrap();
    CalendarEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        start,
        end: start + chrono::Duration::minutes(30),
        kind: EventKind::Appointment,
        display: serde_json::json!({}),
    }
}

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
}

// ==============================================================================
// SLOT-LEVEL PLACEMENT (DAY / WEEK)
// ==============================================================================

#[test]
fn test_event_lands_in_enclosing_slot_not_the_next() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![event_at("2025-03-12T07:30:00", "Mid-slot visit")];

    let placement = place_events(&events, &slots, CalendarView::Day, anchor());
    let slot_placement = placement.as_slots().unwrap();

    let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
    let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    assert_eq!(slot_placement.events_at(anchor(), seven).len(), 1);
    assert!(slot_placement.events_at(anchor(), eight).is_empty());
}

#[test]
fn test_event_before_day_start_is_outside_the_window() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![
        event_at("2025-03-12T05:00:00", "Too early"),
        event_at("2025-03-12T22:00:00", "Too late"),
        event_at("2025-03-12T06:00:00", "First slot"),
    ];

    let placement = place_events(&events, &slots, CalendarView::Day, anchor());
    let slot_placement = placement.as_slots().unwrap();

    // Only the in-window event is placed; the others are omitted, not errors
    assert_eq!(slot_placement.total_placed(), 1);
    let six = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
    assert_eq!(slot_placement.events_at(anchor(), six)[0].title, "First slot");
}

#[test]
fn test_concurrent_events_share_a_slot_in_source_order() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![
        event_at("2025-03-12T09:00:00", "First booked"),
        event_at("2025-03-12T09:15:00", "Second booked"),
        event_at("2025-03-12T09:00:00", "Third booked"),
    ];

    let placement = place_events(&events, &slots, CalendarView::Day, anchor());
    let slot_placement = placement.as_slots().unwrap();

    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let titles: Vec<&str> = slot_placement
        .events_at(anchor(), nine)
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(titles, vec!["First booked", "Second booked", "Third booked"]);
}

#[test]
fn test_week_view_covers_sunday_through_saturday() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![
        event_at("2025-03-09T10:00:00", "Sunday visit"),
        event_at("2025-03-15T10:00:00", "Saturday visit"),
        event_at("2025-03-16T10:00:00", "Next week"),
    ];

    let placement = place_events(&events, &slots, CalendarView::Week, anchor());
    let slot_placement = placement.as_slots().unwrap();

    assert_eq!(slot_placement.days.len(), 7);
    assert_eq!(slot_placement.total_placed(), 2);
}

#[test]
fn test_placement_is_idempotent() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![
        event_at("2025-03-12T07:30:00", "A"),
        event_at("2025-03-12T09:00:00", "B"),
        event_at("2025-03-13T11:45:00", "C"),
    ];

    let first = place_events(&events, &slots, CalendarView::Week, anchor());
    let second = place_events(&events, &slots, CalendarView::Week, anchor());
    assert_eq!(first, second);
}

#[test]
fn test_empty_inputs_resolve_to_empty_placement() {
    let slots = generate_time_slots(&default_settings());

    let no_events = place_events(&[], &slots, CalendarView::Day, anchor());
    assert_eq!(no_events.as_slots().unwrap().total_placed(), 0);

    let no_slots = place_events(
        &[event_at("2025-03-12T09:00:00", "Orphan")],
        &[],
        CalendarView::Day,
        anchor(),
    );
    assert_eq!(no_slots.as_slots().unwrap().total_placed(), 0);
}

#[test]
fn test_out_of_window_event_survives_normalization() {
    use calendar_cell::services::normalizer::normalize_events;
    use shared_models::{RawEventBatch, RawReminder};

    let batch = RawEventBatch {
        reminders: vec![RawReminder {
            id: Uuid::new_v4(),
            message: "Before opening".to_string(),
            remind_at: "2025-03-12T05:00:00".to_string(),
        }],
        ..Default::default()
    };

    let normalized = normalize_events(&batch);
    assert_eq!(normalized.events.len(), 1);

    // Normalization keeps it; only the visible window drops it
    let slots = generate_time_slots(&default_settings());
    let placement = place_events(&normalized.events, &slots, CalendarView::Day, anchor());
    assert_eq!(placement.as_slots().unwrap().total_placed(), 0);
}

// ==============================================================================
// DAY-LEVEL PLACEMENT (MONTH)
// ==============================================================================

#[test]
fn test_month_view_caps_visible_events_and_counts_overflow() {
    let slots = generate_time_slots(&default_settings());
    let events: Vec<CalendarEvent> = (0..5)
        .map(|hour| event_at(&format!("2025-03-12T{:02}:00:00", 9 + hour), "Busy day"))
        .collect();

    let placement = place_events(&events, &slots, CalendarView::Month, anchor());
    let day_placement = placement.as_days().unwrap();

    let bucket = day_placement.bucket(anchor()).unwrap();
    assert_eq!(bucket.visible.len(), MONTH_VISIBLE_EVENT_CAP);
    assert_eq!(bucket.overflow, 2);
    assert_eq!(bucket.total(), 5);
}

#[test]
fn test_month_view_ignores_slot_granularity() {
    // Events before day_start still appear in the month bucket: the cap is
    // the only month-view policy, there is no slot windowing at this level
    let slots = generate_time_slots(&default_settings());
    let events = vec![event_at("2025-03-12T05:00:00", "Early entry")];

    let placement = place_events(&events, &slots, CalendarView::Month, anchor());
    let day_placement = placement.as_days().unwrap();

    assert_eq!(day_placement.bucket(anchor()).unwrap().visible.len(), 1);
}

#[test]
fn test_month_view_buckets_by_calendar_day() {
    let slots = generate_time_slots(&default_settings());
    let events = vec![
        event_at("2025-03-01T09:00:00", "First"),
        event_at("2025-03-31T09:00:00", "Last"),
        event_at("2025-04-02T09:00:00", "Trailing pad"),
        event_at("2025-04-12T09:00:00", "Out of range"),
    ];

    let placement = place_events(&events, &slots, CalendarView::Month, anchor());
    let day_placement = placement.as_days().unwrap();

    assert!(day_placement
        .bucket(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        .is_some());
    assert!(day_placement
        .bucket(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())
        .is_some());
    // The week-aligned grid pads into early April, but not two weeks out
    assert!(day_placement
        .bucket(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
        .is_some());
    assert!(day_placement
        .bucket(NaiveDate::from_ymd_opt(2025, 4, 12).unwrap())
        .is_none());
}
