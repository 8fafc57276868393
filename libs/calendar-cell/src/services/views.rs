// libs/calendar-cell/src/services/views.rs
//
// Thinnest layer of the engine: turns slots plus a placement into the
// layout-specific grid descriptions the presentation code consumes. Anything
// past these contracts (styling, interaction) lives with the UI collaborators.

use chrono::{Datelike, NaiveDate};

use crate::models::{
    DayGrid, DayPlacement, MonthDayCell, MonthGrid, SlotPlacement, SlotRow, TimeSlot, WeekGrid,
    WeekRow,
};

/// One row per slot, each carrying the events placed at (date, slot).
pub fn build_day_grid(date: NaiveDate, slots: &[TimeSlot], placement: &SlotPlacement) -> DayGrid {
    let rows = slots
        .iter()
        .map(|slot| SlotRow {
            slot: slot.clone(),
            events: placement.events_at(date, slot.start_time).to_vec(),
        })
        .collect();

    DayGrid { date, rows }
}

/// One row per slot with a cell per day, columns aligned with `days`.
pub fn build_week_grid(slots: &[TimeSlot], placement: &SlotPlacement) -> WeekGrid {
    let days = placement.days.clone();
    let rows = slots
        .iter()
        .map(|slot| WeekRow {
            slot: slot.clone(),
            cells: days
                .iter()
                .map(|day| placement.events_at(*day, slot.start_time).to_vec())
                .collect(),
        })
        .collect();

    WeekGrid { days, rows }
}

/// Sunday-first rows of seven day cells, padded with adjacent-month days.
pub fn build_month_grid(anchor_date: NaiveDate, placement: &DayPlacement) -> MonthGrid {
    let anchor_month = (anchor_date.year(), anchor_date.month());

    let cells: Vec<MonthDayCell> = placement
        .days
        .iter()
        .map(|day| {
            let bucket = placement.bucket(*day);
            MonthDayCell {
                date: *day,
                in_month: (day.year(), day.month()) == anchor_month,
                events: bucket.map(|bucket| bucket.visible.clone()).unwrap_or_default(),
                overflow: bucket.map(|bucket| bucket.overflow).unwrap_or(0),
            }
        })
        .collect();

    MonthGrid {
        anchor_month,
        weeks: cells.chunks(7).map(|week| week.to_vec()).collect(),
    }
}
