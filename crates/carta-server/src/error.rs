//! API error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carta_core::error::CartaError;
use serde_json::json;

/// Wrapper mapping domain errors onto HTTP responses.
///
/// Client-side failures (validation, bad references, bad time ranges)
/// map to 400, lookup misses to 404, store and timeout failures to 500
/// with the detail logged rather than exposed.
#[derive(Debug)]
pub struct ApiError(pub CartaError);

impl From<CartaError> for ApiError {
    fn from(err: CartaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CartaError::NotFound { .. } => StatusCode::NOT_FOUND,
            CartaError::ReferenceNotFound { .. }
            | CartaError::Validation { .. }
            | CartaError::InvalidTimeRange { .. } => StatusCode::BAD_REQUEST,
            CartaError::Timeout { .. } | CartaError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_failures_are_client_errors() {
        let resp = ApiError(CartaError::ReferenceNotFound {
            entity: "menu".into(),
            id: "x".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_and_time_range_are_client_errors() {
        let resp = ApiError(CartaError::Validation {
            message: "bad".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError(CartaError::InvalidTimeRange {
            reason: "bad".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let resp = ApiError(CartaError::NotFound {
            entity: "food".into(),
            id: "x".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_are_server_errors() {
        let resp = ApiError(CartaError::Database("boom".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = ApiError(CartaError::Timeout {
            operation: "food.list".into(),
        })
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
