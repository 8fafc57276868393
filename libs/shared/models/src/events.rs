// libs/shared/models/src/events.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==============================================================================
// NORMALIZED CALENDAR EVENTS
// ==============================================================================

/// Category of a calendar event. Each kind is fed by its own collaborator
/// (appointments API, tasks API, ...) with its own record shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Appointment,
    Task,
    Reminder,
    Meeting,
    OutOfOffice,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Appointment => write!(f, "appointment"),
            EventKind::Task => write!(f, "task"),
            EventKind::Reminder => write!(f, "reminder"),
            EventKind::Meeting => write!(f, "meeting"),
            EventKind::OutOfOffice => write!(f, "out_of_office"),
        }
    }
}

/// Uniform calendar event produced by the normalizer.
///
/// Timestamps are deliberately time-zone-naive: the engine renders the
/// practice's wall-clock schedule and leaves zone handling to collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    /// Always >= start; sources reporting an end before the start are
    /// clamped to zero duration rather than rejected.
    pub end: NaiveDateTime,
    pub kind: EventKind,
    /// Opaque display fields carried through for the renderers.
    pub display: serde_json::Value,
}

impl CalendarEvent {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

// ==============================================================================
// RAW COLLABORATOR RECORDS
// ==============================================================================
// One shape per event kind, matching the field names each source API uses.
// Timestamps arrive as strings and are validated by the normalizer, not here.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAppointment {
    pub id: Uuid,
    pub patient_name: String,
    pub appointment_type: String,
    pub appointment_date: String,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTask {
    pub id: Uuid,
    pub title: String,
    pub due_at: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReminder {
    pub id: Uuid,
    pub message: String,
    pub remind_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMeeting {
    pub id: Uuid,
    pub subject: String,
    pub starts_at: String,
    pub ends_at: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOutOfOffice {
    pub id: Uuid,
    pub reason: Option<String>,
    pub starts_at: String,
    pub ends_at: Option<String>,
}

/// Snapshot of every event source for one render, as fetched by the data
/// collaborators. Missing sections deserialize to empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEventBatch {
    #[serde(default)]
    pub appointments: Vec<RawAppointment>,
    #[serde(default)]
    pub tasks: Vec<RawTask>,
    #[serde(default)]
    pub reminders: Vec<RawReminder>,
    #[serde(default)]
    pub meetings: Vec<RawMeeting>,
    #[serde(default)]
    pub out_of_office: Vec<RawOutOfOffice>,
}

impl RawEventBatch {
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
            && self.tasks.is_empty()
            && self.reminders.is_empty()
            && self.meetings.is_empty()
            && self.out_of_office.is_empty()
    }
}
