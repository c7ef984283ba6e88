//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A registered short link with its usage counters.
///
/// `code` and `target_url` never change once the link is stored. The counters
/// are only touched by a successful resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: u64,
    pub last_accessed_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Builds a fresh, never-clicked link from creation input.
    pub fn from_new(new_link: NewLink) -> Self {
        Self {
            code: new_link.code,
            target_url: new_link.target_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            click_count: 0,
            last_accessed_at: None,
        }
    }

    /// Returns true if the link can no longer be resolved at `now`.
    ///
    /// A link whose expiry equals `now` exactly is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e <= now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Counts one successful visit.
    pub fn record_click(&mut self, at: DateTime<Utc>) {
        self.click_count = self.click_count.saturating_add(1);
        self.last_accessed_at = Some(at);
    }
}

/// Input data for registering a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
