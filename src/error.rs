//! Error types for the timetable engine.
//!
//! Only conditions fatal to a generation run are errors. Everything the
//! engine can work around (unplaceable hours, missing rooms, detected
//! conflicts) is accumulated into the run summary instead, so the caller
//! always receives a best-effort schedule.

use thiserror::Error;

/// Fatal errors for timetable engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Calendar generation was requested for an unregistered configuration.
    #[error("configuration not found: {0}")]
    ConfigurationNotFound(String),

    /// The run has no subjects or no faculty and cannot place anything.
    #[error("insufficient input data: {0} subjects, {1} faculty")]
    InsufficientInputData(usize, usize),
}

/// Errors from parsing wall-clock values out of configuration data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a valid `HH:MM` time.
    #[error("invalid time of day: {0:?}")]
    Time(String),

    /// Not a recognized weekday name.
    #[error("invalid weekday: {0:?}")]
    Weekday(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
