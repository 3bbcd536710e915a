//! Error types for the Carta system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartaError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Referenced {entity} not found: {id}")]
    ReferenceNotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid time range: {reason}")]
    InvalidTimeRange { reason: String },

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Database error: {0}")]
    Database(String),
}

pub type CartaResult<T> = Result<T, CartaError>;
