//! Error types for evently.

use thiserror::Error;

/// Errors that can occur in evently operations.
///
/// Storage and (de)serialization failures never escape the public catalog
/// operations; [`crate::session::EventSession`] logs them and degrades to
/// seed data or the previous in-memory state instead.
#[derive(Error, Debug)]
pub enum EventlyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read '{key}' from storage: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Could not write '{key}' to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("Stored catalog is invalid: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Duplicate event id '{0}' in catalog")]
    DuplicateEventId(String),

    #[error("Event '{id}' has a negative price ({price})")]
    NegativePrice { id: String, price: f64 },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Unknown price filter '{0}'. Expected all, free or paid")]
    UnknownPriceTier(String),

    #[error("Unknown profile tab '{0}'. Expected rsvp, favorites or attended")]
    UnknownProfileTab(String),
}

/// Result type alias for evently operations.
pub type EventlyResult<T> = Result<T, EventlyError>;
