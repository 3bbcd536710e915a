//! Database-specific error types and conversions.

use carta_core::error::CartaError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Referenced {entity} not found: {id}")]
    ReferenceNotFound { entity: String, id: String },
}

impl From<DbError> for CartaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CartaError::NotFound { entity, id },
            DbError::ReferenceNotFound { entity, id } => {
                CartaError::ReferenceNotFound { entity, id }
            }
            other => CartaError::Database(other.to_string()),
        }
    }
}
