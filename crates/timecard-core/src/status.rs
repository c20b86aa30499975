//! The closed set of response status codes usable by this layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status codes the API layer is allowed to produce.
///
/// Handlers must not emit any code outside this set. The payload-less
/// success path responds with `204 No Content` at the transport level,
/// which is a success shape rather than a catalog member and never
/// appears inside an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// 200 - successful request with a body.
    Ok,
    /// 304 - client cache is still valid.
    NotModified,
    /// 400 - missing or invalid parameters, aggregate bulk failure.
    BadRequest,
    /// 401 - authentication required or failed.
    Unauthorized,
    /// 403 - authorization gate denied the action.
    Forbidden,
    /// 404 - the addressed record does not exist.
    NotFound,
    /// 500 - unexpected failure surfaced by the transport layer.
    InternalServerError,
}

impl StatusCode {
    /// The standard numeric code carried in error bodies and used as the
    /// transport-level status.
    pub fn code(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotModified => 304,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Ok => "ok",
            StatusCode::NotModified => "not_modified",
            StatusCode::BadRequest => "bad_request",
            StatusCode::Unauthorized => "unauthorized",
            StatusCode::Forbidden => "forbidden",
            StatusCode::NotFound => "not_found",
            StatusCode::InternalServerError => "internal_server_error",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes_match_standard_table() {
        assert_eq!(StatusCode::Ok.code(), 200);
        assert_eq!(StatusCode::NotModified.code(), 304);
        assert_eq!(StatusCode::BadRequest.code(), 400);
        assert_eq!(StatusCode::Unauthorized.code(), 401);
        assert_eq!(StatusCode::Forbidden.code(), 403);
        assert_eq!(StatusCode::NotFound.code(), 404);
        assert_eq!(StatusCode::InternalServerError.code(), 500);
    }

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&StatusCode::BadRequest).unwrap();
        assert_eq!(json, "\"bad_request\"");
    }
}
