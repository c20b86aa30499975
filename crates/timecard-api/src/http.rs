//! HTTP integration: outcomes as axum responses.
//!
//! The transport mapping:
//! - error outcome -> catalog status plus a `{message, status}` JSON body
//! - success with payload -> `200 OK` with the payload as body
//! - success without payload -> `204 No Content`, or `200 OK` with a
//!   `{"warnings": [...]}` body when partial bulk failures rode along

use crate::responder::Responder;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode as HttpStatus;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use timecard_core::{ErrorBody, Outcome};

/// Newtype making an [`Outcome`] an axum response.
pub struct ApiResponse(pub Outcome);

impl From<Outcome> for ApiResponse {
    fn from(outcome: Outcome) -> Self {
        ApiResponse(outcome)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        match self.0 {
            Outcome::Error { status, message } => {
                let body = ErrorBody {
                    message,
                    status: status.code(),
                };
                (transport_status(status.code()), Json(body)).into_response()
            }
            Outcome::Success {
                payload: Some(payload),
                ..
            } => (HttpStatus::OK, Json(payload)).into_response(),
            Outcome::Success {
                payload: None,
                warnings,
            } if !warnings.is_empty() => {
                (HttpStatus::OK, Json(json!({ "warnings": warnings }))).into_response()
            }
            Outcome::Success { .. } => HttpStatus::NO_CONTENT.into_response(),
        }
    }
}

/// Translate a rejected request body into the missing-parameters
/// response. Wired where the framework would otherwise answer with its
/// own error shape.
pub fn reject_missing_parameters(responder: &Responder, rejection: &JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "request body rejected");
    ApiResponse(responder.missing_parameters()).into_response()
}

fn transport_status(code: u16) -> HttpStatus {
    HttpStatus::from_u16(code).unwrap_or(HttpStatus::INTERNAL_SERVER_ERROR)
}
