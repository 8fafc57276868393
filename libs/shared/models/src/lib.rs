pub mod error;
pub mod events;
pub mod settings;

// Re-export the collaborator seam types for external use
pub use error::NormalizeError;
pub use events::{
    CalendarEvent, EventKind, RawAppointment, RawEventBatch, RawMeeting, RawOutOfOffice,
    RawReminder, RawTask,
};
pub use settings::RawScheduleSettings;
