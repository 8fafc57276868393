// libs/calendar-cell/src/services/slots.rs
use chrono::{NaiveTime, Timelike};
use tracing::debug;

use crate::models::{ScheduleSettings, TimeSlot};

/// Generate the ordered slot list covering `[day_start, day_end)`.
///
/// The axis is recomputed fresh on every call from the settings passed in;
/// nothing is cached, so a reconfigured interval or window takes effect on
/// the next render. A trailing partial interval is dropped: a slot is only
/// emitted when its full width fits before `day_end`. An unsatisfiable
/// window yields an empty list rather than an error.
pub fn generate_time_slots(settings: &ScheduleSettings) -> Vec<TimeSlot> {
    let start_minutes = minutes_since_midnight(settings.day_start);
    let end_minutes = minutes_since_midnight(settings.day_end);
    let step = settings.interval_minutes;

    let mut slots = Vec::new();
    let mut current = start_minutes;

    while current + step <= end_minutes {
        let start_time = time_from_minutes(current);
        let end_time = time_from_minutes(current + step);

        slots.push(TimeSlot {
            start_time,
            end_time,
            label: format_slot_label(start_time),
            is_available: true,
        });

        current += step;
    }

    debug!(
        "Generated {} slots of {} minutes between {} and {}",
        slots.len(),
        step,
        settings.day_start,
        settings.day_end
    );

    slots
}

fn minutes_since_midnight(time: NaiveTime) -> i32 {
    (time.hour() * 60 + time.minute()) as i32
}

fn time_from_minutes(minutes: i32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(minutes as u32 * 60, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// 12-hour display label for a slot start, e.g. "6:00 AM" or "12:30 PM".
fn format_slot_label(time: NaiveTime) -> String {
    time.format("%l:%M %p").to_string().trim_start().to_string()
}
