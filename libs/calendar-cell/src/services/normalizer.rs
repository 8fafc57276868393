// libs/calendar-cell/src/services/normalizer.rs
use chrono::{DateTime, Duration, NaiveDateTime};
use serde_json::json;
use tracing::{debug, warn};

use shared_models::{
    CalendarEvent, EventKind, NormalizeError, RawAppointment, RawEventBatch, RawMeeting,
    RawOutOfOffice, RawReminder, RawTask,
};

use crate::models::{DroppedEvent, NormalizedEvents};

/// Appointments with no explicit end default to a fixed hour, independent of
/// the configured slot interval.
// TODO: confirm with product whether this should inherit the configured
// interval length instead of a fixed 60 minutes.
pub const APPOINTMENT_DEFAULT_DURATION_MINUTES: i64 = 60;

/// Convert one snapshot of heterogeneous source records into the uniform
/// event list the placement engine consumes.
///
/// Dispatch is by record kind, one mapping function per source shape. A
/// record whose start timestamp cannot be parsed is excluded and reported in
/// `dropped`; everything else renders normally. Output order is input order:
/// appointments, then tasks, reminders, meetings, and out-of-office entries,
/// stable within each kind.
pub fn normalize_events(batch: &RawEventBatch) -> NormalizedEvents {
    let mut normalized = NormalizedEvents::default();

    for appointment in &batch.appointments {
        collect(&mut normalized, normalize_appointment(appointment));
    }
    for task in &batch.tasks {
        collect(&mut normalized, normalize_task(task));
    }
    for reminder in &batch.reminders {
        collect(&mut normalized, normalize_reminder(reminder));
    }
    for meeting in &batch.meetings {
        collect(&mut normalized, normalize_meeting(meeting));
    }
    for entry in &batch.out_of_office {
        collect(&mut normalized, normalize_out_of_office(entry));
    }

    debug!(
        "Normalized {} events ({} dropped)",
        normalized.events.len(),
        normalized.dropped.len()
    );

    normalized
}

fn collect(normalized: &mut NormalizedEvents, result: Result<CalendarEvent, DroppedEvent>) {
    match result {
        Ok(event) => normalized.events.push(event),
        Err(dropped) => {
            warn!(
                "Dropping {} {} from calendar: {}",
                dropped.kind, dropped.id, dropped.reason
            );
            normalized.dropped.push(dropped);
        }
    }
}

fn normalize_appointment(raw: &RawAppointment) -> Result<CalendarEvent, DroppedEvent> {
    let start = parse_start(&raw.appointment_date, raw.id, EventKind::Appointment)?;
    let end = explicit_end(raw.end_time.as_deref())
        .unwrap_or(start + Duration::minutes(APPOINTMENT_DEFAULT_DURATION_MINUTES));

    Ok(CalendarEvent {
        id: raw.id,
        title: format!("{} - {}", raw.appointment_type, raw.patient_name),
        start,
        end: clamp_end(start, end),
        kind: EventKind::Appointment,
        display: json!({
            "patient_name": raw.patient_name,
            "appointment_type": raw.appointment_type,
            "notes": raw.notes,
        }),
    })
}

fn normalize_task(raw: &RawTask) -> Result<CalendarEvent, DroppedEvent> {
    let start = parse_start(&raw.due_at, raw.id, EventKind::Task)?;

    Ok(CalendarEvent {
        id: raw.id,
        title: raw.title.clone(),
        start,
        // Tasks are due at an instant; they occupy no span on the grid
        end: start,
        kind: EventKind::Task,
        display: json!({ "is_completed": raw.is_completed }),
    })
}

fn normalize_reminder(raw: &RawReminder) -> Result<CalendarEvent, DroppedEvent> {
    let start = parse_start(&raw.remind_at, raw.id, EventKind::Reminder)?;

    Ok(CalendarEvent {
        id: raw.id,
        title: raw.message.clone(),
        start,
        end: start,
        kind: EventKind::Reminder,
        display: json!({ "message": raw.message }),
    })
}

fn normalize_meeting(raw: &RawMeeting) -> Result<CalendarEvent, DroppedEvent> {
    let start = parse_start(&raw.starts_at, raw.id, EventKind::Meeting)?;
    let end = explicit_end(raw.ends_at.as_deref()).unwrap_or(start);

    Ok(CalendarEvent {
        id: raw.id,
        title: raw.subject.clone(),
        start,
        end: clamp_end(start, end),
        kind: EventKind::Meeting,
        display: json!({ "location": raw.location }),
    })
}

fn normalize_out_of_office(raw: &RawOutOfOffice) -> Result<CalendarEvent, DroppedEvent> {
    let start = parse_start(&raw.starts_at, raw.id, EventKind::OutOfOffice)?;
    let end = explicit_end(raw.ends_at.as_deref()).unwrap_or(start);

    Ok(CalendarEvent {
        id: raw.id,
        title: raw
            .reason
            .clone()
            .unwrap_or_else(|| "Out of office".to_string()),
        start,
        end: clamp_end(start, end),
        kind: EventKind::OutOfOffice,
        display: json!({ "reason": raw.reason }),
    })
}

// Private helper methods

fn parse_start(
    raw: &str,
    id: uuid::Uuid,
    kind: EventKind,
) -> Result<NaiveDateTime, DroppedEvent> {
    if raw.trim().is_empty() {
        return Err(DroppedEvent {
            id,
            kind,
            reason: NormalizeError::MissingStart,
        });
    }

    parse_timestamp(raw).ok_or_else(|| DroppedEvent {
        id,
        kind,
        reason: NormalizeError::UnparsableStart(raw.to_string()),
    })
}

/// An unparsable explicit end is treated as missing, so the kind's default
/// duration applies; only a broken start excludes the record.
fn explicit_end(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw?;
    match parse_timestamp(raw) {
        Some(end) => Some(end),
        None => {
            warn!("Ignoring malformed end timestamp: '{}'", raw);
            None
        }
    }
}

fn clamp_end(start: NaiveDateTime, end: NaiveDateTime) -> NaiveDateTime {
    // A source reporting end <= start renders as zero duration, not an error
    if end > start {
        end
    } else {
        start
    }
}

/// Source APIs deliver either RFC 3339 or bare "Y-m-dTH:M:S" timestamps.
/// Offsets are discarded: the engine works in the practice's wall-clock time.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
}
