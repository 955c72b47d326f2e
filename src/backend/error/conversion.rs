/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` so handlers and middleware can
 * return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid credentials",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
