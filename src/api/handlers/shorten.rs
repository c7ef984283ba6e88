//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "my-link",   // optional
///   "ttl": 60,            // optional, minutes
///   "random": false       // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "/my-link",
///   "alias": "my-link",
///   "expires_at": "2025-01-01T13:00:00Z"
/// }
/// ```
///
/// Repeating a request for a URL that is already registered under the same
/// code returns the existing mapping.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, `url` is missing or blank,
/// the alias is invalid or the TTL is out of range.
/// Returns 409 Conflict if the alias is bound to a different URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let input = payload
        .into_create_link()
        .ok_or_else(|| AppError::invalid_input("url is required", json!({ "field": "url" })))?;

    let created = state.link_service.create_short_link(input).await?;

    Ok(Json(ShortenResponse {
        short_url: created.short_url,
        alias: created.code,
        expires_at: created.expires_at,
    }))
}
