//! Caller identity extraction.
//!
//! Authentication itself lives in the gateway in front of this service;
//! by the time a request reaches a handler it carries the authenticated
//! username in the `x-user-id` header. Requests without it are rejected.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

pub const CALLER_HEADER: &str = "x-user-id";

/// Authenticated request context.
/// Add this as a handler parameter to require a caller identity.
#[derive(Clone, Debug)]
pub struct CallerIdentity {
    pub username: String,
}

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "unauthenticated", "message": "Missing caller identity" })),
                )
                    .into_response()
            })?;

        Ok(Self { username })
    }
}
