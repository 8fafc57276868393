// libs/calendar-cell/src/models.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use shared_models::{CalendarEvent, EventKind, NormalizeError};

// ==============================================================================
// RESOLVED SETTINGS AND TIME SLOTS
// ==============================================================================

/// Fully-resolved scheduling configuration for one render.
///
/// Produced by `services::settings::resolve_settings` from the raw
/// collaborator value; every invalid or missing field has already been
/// replaced by its default, so consumers never re-validate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSettings {
    pub interval_minutes: i32,
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    /// Reserved for edge-adjacent slot suppression around existing bookings.
    /// Carried through resolution but not yet applied by the generator.
    pub buffer_minutes: i32,
}

/// A fixed-width interval within a day's visible schedule window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// 12-hour display label, e.g. "6:00 AM".
    pub label: String,
    pub is_available: bool,
}

// ==============================================================================
// PLACEMENT
// ==============================================================================

/// Which layout a render targets. Switching views is external; it only
/// changes which placement strategy and grid builder run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

/// Coordinate of one slot cell in the day/week layouts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotKey {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
}

/// Slot-level placement used by the day and week views.
///
/// Events sharing a cell keep normalizer output order; events whose start
/// falls outside every generated slot are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SlotPlacement {
    pub days: Vec<NaiveDate>,
    pub by_slot: BTreeMap<SlotKey, Vec<CalendarEvent>>,
}

impl SlotPlacement {
    pub fn events_at(&self, day: NaiveDate, start_time: NaiveTime) -> &[CalendarEvent] {
        self.by_slot
            .get(&SlotKey { day, start_time })
            .map(|events| events.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_placed(&self) -> usize {
        self.by_slot.values().map(|events| events.len()).sum()
    }
}

/// Day-level bucket used by the month view. Visibility capping is a
/// month-view display policy only; nothing upstream loses data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayBucket {
    pub visible: Vec<CalendarEvent>,
    pub overflow: usize,
}

impl DayBucket {
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }
}

/// Day-granularity placement used by the month view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayPlacement {
    pub days: Vec<NaiveDate>,
    pub by_day: BTreeMap<NaiveDate, DayBucket>,
}

impl DayPlacement {
    pub fn bucket(&self, day: NaiveDate) -> Option<&DayBucket> {
        self.by_day.get(&day)
    }
}

/// Placement output: one interface, two strategies selected by the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Placement {
    Slots(SlotPlacement),
    Days(DayPlacement),
}

impl Placement {
    pub fn as_slots(&self) -> Option<&SlotPlacement> {
        match self {
            Placement::Slots(placement) => Some(placement),
            Placement::Days(_) => None,
        }
    }

    pub fn as_days(&self) -> Option<&DayPlacement> {
        match self {
            Placement::Days(placement) => Some(placement),
            Placement::Slots(_) => None,
        }
    }
}

// ==============================================================================
// GRID DESCRIPTIONS CONSUMED BY THE VIEW LAYER
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub rows: Vec<SlotRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekRow {
    pub slot: TimeSlot,
    /// One cell per day, aligned with `WeekGrid::days`.
    pub cells: Vec<Vec<CalendarEvent>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekGrid {
    pub days: Vec<NaiveDate>,
    pub rows: Vec<WeekRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthDayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days padding the grid to full weeks.
    pub in_month: bool,
    pub events: Vec<CalendarEvent>,
    pub overflow: usize,
}

impl MonthDayCell {
    /// Overflow summary shown in place of the hidden events, e.g. "+2 more".
    pub fn overflow_label(&self) -> Option<String> {
        if self.overflow > 0 {
            Some(format!("+{} more", self.overflow))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGrid {
    pub anchor_month: (i32, u32),
    /// Sunday-first rows of seven cells each.
    pub weeks: Vec<Vec<MonthDayCell>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarGrid {
    Day(DayGrid),
    Week(WeekGrid),
    Month(MonthGrid),
}

// ==============================================================================
// NORMALIZER OUTPUT AND DIAGNOSTICS
// ==============================================================================

/// A record excluded from the render because its data could not be
/// normalized. Surfaced so the caller can log it; never fatal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DroppedEvent {
    pub id: uuid::Uuid,
    pub kind: EventKind,
    pub reason: NormalizeError,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizedEvents {
    pub events: Vec<CalendarEvent>,
    pub dropped: Vec<DroppedEvent>,
}

/// Full output of one render pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedCalendar {
    pub grid: CalendarGrid,
    pub dropped: Vec<DroppedEvent>,
}
