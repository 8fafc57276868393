// libs/calendar-cell/src/services/settings.rs
use chrono::NaiveTime;
use tracing::warn;

use shared_models::RawScheduleSettings;

use crate::models::ScheduleSettings;

pub const DEFAULT_INTERVAL_MINUTES: i32 = 60;
pub const DEFAULT_BUFFER_MINUTES: i32 = 0;

pub fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).unwrap()
}

pub fn default_day_end() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap()
}

/// Resolve raw practice configuration into usable settings.
///
/// Settings are practice configuration, not user input awaiting feedback, so
/// the engine favors availability over strict validation: any missing or
/// invalid field falls back to its default instead of raising an error. Pure
/// and uncached; callers re-resolve on every render so an out-of-band
/// configuration change is reflected on the next call.
pub fn resolve_settings(raw: Option<&RawScheduleSettings>) -> ScheduleSettings {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            return ScheduleSettings {
                interval_minutes: DEFAULT_INTERVAL_MINUTES,
                day_start: default_day_start(),
                day_end: default_day_end(),
                buffer_minutes: DEFAULT_BUFFER_MINUTES,
            }
        }
    };

    let interval_minutes = match raw.interval_minutes {
        Some(interval) if interval > 0 => interval,
        Some(interval) => {
            warn!("Ignoring non-positive slot interval: {}", interval);
            DEFAULT_INTERVAL_MINUTES
        }
        None => DEFAULT_INTERVAL_MINUTES,
    };

    let buffer_minutes = match raw.buffer_minutes {
        Some(buffer) if buffer >= 0 => buffer,
        Some(buffer) => {
            warn!("Ignoring negative buffer: {}", buffer);
            DEFAULT_BUFFER_MINUTES
        }
        None => DEFAULT_BUFFER_MINUTES,
    };

    let mut day_start = resolve_time_of_day(raw.day_start.as_deref(), default_day_start());
    let mut day_end = resolve_time_of_day(raw.day_end.as_deref(), default_day_end());

    // An inverted or empty window is a configuration error; reset the pair
    // together so the resolved window is always coherent.
    if day_end <= day_start {
        warn!(
            "Schedule window {} - {} is inverted or empty, using defaults",
            day_start, day_end
        );
        day_start = default_day_start();
        day_end = default_day_end();
    }

    ScheduleSettings {
        interval_minutes,
        day_start,
        day_end,
        buffer_minutes,
    }
}

fn resolve_time_of_day(raw: Option<&str>, default: NaiveTime) -> NaiveTime {
    let raw = match raw {
        Some(raw) => raw,
        None => return default,
    };

    match parse_time_of_day(raw) {
        Some(time) => time,
        None => {
            warn!("Ignoring malformed time of day: '{}'", raw);
            default
        }
    }
}

/// Accepts the "HH:MM" and "HH:MM:SS" shapes the settings store uses.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}
