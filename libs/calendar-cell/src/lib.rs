pub mod models;
pub mod services;

// Re-export the engine surface for external use
pub use models::*;
pub use services::*;

// Specifically re-export the collaborator seam types alongside the engine
pub use shared_models::{
    CalendarEvent, EventKind, NormalizeError, RawEventBatch, RawScheduleSettings,
};
