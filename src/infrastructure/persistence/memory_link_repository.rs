use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{Insertion, LinkRepository};
use crate::error::AppError;

/// Process-local link registry.
///
/// Backed by a `DashMap`, so every read-check-mutate sequence runs under the
/// shard lock of its key. Records live for the lifetime of the process;
/// expired links are kept and stay visible to [`LinkRepository::find_by_code`].
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_or_get(&self, new_link: NewLink) -> Result<Insertion, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(entry) => Ok(Insertion::Existing(entry.get().clone())),
            Entry::Vacant(entry) => {
                let link = Link::from_new(new_link);
                entry.insert(link.clone());
                Ok(Insertion::Created(link))
            }
        }
    }

    async fn record_click(&self, code: &str, at: DateTime<Utc>) -> Result<Link, AppError> {
        let mut link = self.links.get_mut(code).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })?;

        if link.is_expired_at(at) {
            return Err(AppError::expired(
                "Link has expired",
                json!({ "code": code, "expires_at": link.expires_at }),
            ));
        }

        link.record_click(at);
        Ok(link.value().clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|link| link.value().clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.len())
    }
}
