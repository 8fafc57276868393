pub mod engine;
pub mod normalizer;
pub mod placement;
pub mod settings;
pub mod slots;
pub mod views;

pub use engine::CalendarViewService;
pub use normalizer::{normalize_events, APPOINTMENT_DEFAULT_DURATION_MINUTES};
pub use placement::{place_events, month_grid_days, week_days, MONTH_VISIBLE_EVENT_CAP};
pub use settings::{
    resolve_settings, DEFAULT_BUFFER_MINUTES, DEFAULT_INTERVAL_MINUTES,
};
pub use slots::generate_time_slots;
pub use views::{build_day_grid, build_month_grid, build_week_grid};
