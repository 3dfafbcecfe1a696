//! HTTP mapping for caseflow errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::CaseflowError;

impl CaseflowError {
    /// Returns the HTTP status code for this error.
    ///
    /// - NotFound: 404
    /// - rejected requests (unknown status, illegal transition, busy actor,
    ///   bad input): 400
    /// - everything else: 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            CaseflowError::NotFound(_) => StatusCode::NOT_FOUND,
            e if e.is_rejection() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CaseflowError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));
        (status, body).into_response()
    }
}
