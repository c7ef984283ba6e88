//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Read-only snapshot of a short link and its counters.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.target_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            clicks: link.click_count,
            last_accessed: link.last_accessed_at,
        }
    }
}
