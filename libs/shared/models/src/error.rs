use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data-quality errors raised while normalizing collaborator records.
///
/// These are never fatal: the offending record is excluded from the grid and
/// the error is handed back to the caller as a diagnostic to log.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizeError {
    #[error("unparsable start timestamp: '{0}'")]
    UnparsableStart(String),

    #[error("missing start timestamp")]
    MissingStart,
}
