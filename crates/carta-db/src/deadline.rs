//! Deadline enforcement for store operations.

use std::time::Duration;

use carta_core::error::{CartaError, CartaResult};

use crate::error::DbError;

/// Run a store future under `deadline`.
///
/// Elapsing abandons the in-flight call and surfaces
/// [`CartaError::Timeout`] tagged with `operation`. There is no manual
/// cancellation trigger; the deadline is the only abort path.
pub(crate) async fn with_deadline<T>(
    deadline: Duration,
    operation: &str,
    fut: impl Future<Output = Result<T, DbError>>,
) -> CartaResult<T> {
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(CartaError::from),
        Err(_) => Err(CartaError::Timeout {
            operation: operation.to_string(),
        }),
    }
}
