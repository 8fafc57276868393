// libs/calendar-cell/src/services/placement.rs
use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use shared_models::CalendarEvent;

use crate::models::{
    CalendarView, DayBucket, DayPlacement, Placement, SlotKey, SlotPlacement, TimeSlot,
};

/// Month cells show at most this many events; the remainder is summarized
/// as an overflow count. Display policy only, nothing upstream is lost.
pub const MONTH_VISIBLE_EVENT_CAP: usize = 3;

/// Assign normalized events to grid coordinates for the requested view.
///
/// Day and week views place at slot granularity: an event lands in slot `S`
/// on day `D` iff it starts on `D` within `[S.start_time, S.end_time)`. An
/// event starting outside every generated slot is omitted from the grid for
/// that day; it is outside the visible window, not an error. Month view
/// coarsens to day granularity with the visibility cap.
///
/// Pure function of its inputs: identical calls yield identical placements.
pub fn place_events(
    events: &[CalendarEvent],
    slots: &[TimeSlot],
    view: CalendarView,
    anchor_date: NaiveDate,
) -> Placement {
    match view {
        CalendarView::Day => Placement::Slots(place_into_slots(events, slots, vec![anchor_date])),
        CalendarView::Week => {
            Placement::Slots(place_into_slots(events, slots, week_days(anchor_date)))
        }
        CalendarView::Month => {
            Placement::Days(place_into_days(events, month_grid_days(anchor_date)))
        }
    }
}

/// The Sunday-first week containing the anchor date.
pub fn week_days(anchor_date: NaiveDate) -> Vec<NaiveDate> {
    let offset = anchor_date.weekday().num_days_from_sunday() as i64;
    let sunday = anchor_date - Duration::days(offset);
    (0..7).map(|day| sunday + Duration::days(day)).collect()
}

/// The week-aligned day range enclosing the anchor's month: from the Sunday
/// on or before the 1st through the Saturday on or after the last day.
pub fn month_grid_days(anchor_date: NaiveDate) -> Vec<NaiveDate> {
    let first_of_month = anchor_date
        .with_day(1)
        .unwrap_or(anchor_date);
    let last_of_month = last_day_of_month(first_of_month);

    let lead = first_of_month.weekday().num_days_from_sunday() as i64;
    let trail = 6 - last_of_month.weekday().num_days_from_sunday() as i64;

    let grid_start = first_of_month - Duration::days(lead);
    let grid_end = last_of_month + Duration::days(trail);

    let span = (grid_end - grid_start).num_days();
    (0..=span).map(|day| grid_start + Duration::days(day)).collect()
}

fn last_day_of_month(first_of_month: NaiveDate) -> NaiveDate {
    let (year, month) = (first_of_month.year(), first_of_month.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .map(|next| next - Duration::days(1))
        .unwrap_or(first_of_month)
}

fn place_into_slots(
    events: &[CalendarEvent],
    slots: &[TimeSlot],
    days: Vec<NaiveDate>,
) -> SlotPlacement {
    let mut placement = SlotPlacement {
        days,
        by_slot: Default::default(),
    };

    for day in placement.days.clone() {
        // Inner loop walks events in normalizer order, so events sharing a
        // slot keep their source order with no further tie-breaking.
        for event in events {
            if event.start.date() != day {
                continue;
            }

            let start_time = event.start.time();
            let slot = slots
                .iter()
                .find(|slot| slot.start_time <= start_time && start_time < slot.end_time);

            if let Some(slot) = slot {
                placement
                    .by_slot
                    .entry(SlotKey {
                        day,
                        start_time: slot.start_time,
                    })
                    .or_default()
                    .push(event.clone());
            }
        }
    }

    debug!(
        "Placed {} of {} events across {} days",
        placement.total_placed(),
        events.len(),
        placement.days.len()
    );

    placement
}

fn place_into_days(events: &[CalendarEvent], days: Vec<NaiveDate>) -> DayPlacement {
    let mut placement = DayPlacement {
        days,
        by_day: Default::default(),
    };

    for day in placement.days.clone() {
        for event in events {
            if event.start.date() != day {
                continue;
            }

            let bucket = placement.by_day.entry(day).or_insert_with(DayBucket::default);
            if bucket.visible.len() < MONTH_VISIBLE_EVENT_CAP {
                bucket.visible.push(event.clone());
            } else {
                bucket.overflow += 1;
            }
        }
    }

    placement
}
