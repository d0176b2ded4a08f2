//! Error types for the data fixer

use thiserror::Error;

/// Fixer error types
#[derive(Debug, Error)]
pub enum FixerError {
    /// IO error reading or writing the fixture file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture is not valid JSON or is missing a required field
    #[error("Malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// Reservation backfill found no customer records with role "customer"
    #[error("No eligible customers to book reservations for")]
    NoEligibleCustomers,

    /// Atomic replace of the fixture file failed
    #[error("Failed to replace fixture: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type for fixer operations
pub type Result<T> = std::result::Result<T, FixerError>;
