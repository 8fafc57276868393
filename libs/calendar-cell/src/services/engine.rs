// libs/calendar-cell/src/services/engine.rs
use chrono::NaiveDate;
use tracing::debug;

use shared_models::{RawEventBatch, RawScheduleSettings};

use crate::models::{CalendarGrid, CalendarView, Placement, RenderedCalendar};
use crate::services::normalizer::normalize_events;
use crate::services::placement::place_events;
use crate::services::settings::resolve_settings;
use crate::services::slots::generate_time_slots;
use crate::services::views::{build_day_grid, build_month_grid, build_week_grid};

/// Composes the calendar pipeline: resolve settings, generate the time axis,
/// normalize the event snapshot, place, and build the requested grid.
///
/// The service holds no state. Every render recomputes from the snapshots
/// passed in, so a settings or event change is reflected on the next call
/// without any invalidation signal, and concurrent renders cannot interfere.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarViewService;

impl CalendarViewService {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        raw_settings: Option<&RawScheduleSettings>,
        batch: &RawEventBatch,
        view: CalendarView,
        anchor_date: NaiveDate,
    ) -> RenderedCalendar {
        debug!("Rendering {:?} view anchored at {}", view, anchor_date);

        let settings = resolve_settings(raw_settings);
        let slots = generate_time_slots(&settings);
        let normalized = normalize_events(batch);
        let placement = place_events(&normalized.events, &slots, view, anchor_date);

        let grid = match placement {
            Placement::Slots(placement) if view == CalendarView::Day => {
                CalendarGrid::Day(build_day_grid(anchor_date, &slots, &placement))
            }
            Placement::Slots(placement) => {
                CalendarGrid::Week(build_week_grid(&slots, &placement))
            }
            Placement::Days(placement) => {
                CalendarGrid::Month(build_month_grid(anchor_date, &placement))
            }
        };

        RenderedCalendar {
            grid,
            dropped: normalized.dropped,
        }
    }
}
