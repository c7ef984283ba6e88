//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{CreateLink, MAX_TTL_MINUTES};

/// Request to shorten a URL.
///
/// `url` is optional at the wire level so that a missing field is reported
/// as invalid input rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten.
    pub url: Option<String>,

    /// Optional custom short code, checked by the service.
    #[serde(alias = "custom_alias")]
    pub alias: Option<String>,

    /// Optional lifetime in minutes. After it runs out the link returns 410 Gone.
    #[serde(alias = "ttl_minutes")]
    #[validate(range(min = 0, max = MAX_TTL_MINUTES))]
    pub ttl: Option<i64>,

    /// When true and no alias is given, a random code is used instead of
    /// the URL hash.
    #[serde(default)]
    pub random: bool,
}

impl ShortenRequest {
    /// Converts the request into service input. `None` if `url` is missing.
    pub fn into_create_link(self) -> Option<CreateLink> {
        Some(CreateLink {
            target_url: self.url?,
            custom_alias: self.alias,
            ttl_minutes: self.ttl,
            random_alias: self.random,
        })
    }
}

/// Response for a created (or already existing) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub alias: String,
    pub expires_at: Option<DateTime<Utc>>,
}
