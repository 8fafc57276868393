use serde::{Deserialize, Serialize};

/// Raw scheduling configuration as the settings collaborator supplies it.
///
/// Every field is optional and unvalidated; the calendar cell resolves this
/// into a usable `ScheduleSettings` on every render, so a configuration
/// change pushed from elsewhere is picked up by simply re-invoking the
/// resolver. Times are "HH:MM" or "HH:MM:SS" strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScheduleSettings {
    pub interval_minutes: Option<i32>,
    pub day_start: Option<String>,
    pub day_end: Option<String>,
    pub buffer_minutes: Option<i32>,
}
