//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use garage_domain::error::GarageError;

/// JSON error body returned by API endpoints.
///
/// `detail` carries the store's own error text on 500s. That echo is a
/// development-grade diagnostic, not something to expose in a hardened
/// deployment.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

/// Maps [`GarageError`] to an HTTP response with appropriate status code.
pub struct ApiError(GarageError);

impl From<GarageError> for ApiError {
    fn from(err: GarageError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match &self.0 {
            GarageError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            GarageError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string(), None),
            GarageError::Conflict(err) => (StatusCode::CONFLICT, err.to_string(), None),
            GarageError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage error".to_string(),
                    Some(err.to_string()),
                )
            }
        };

        (status, Json(ErrorBody { message, detail })).into_response()
    }
}
