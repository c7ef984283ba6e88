//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Outcome of [`LinkRepository::insert_or_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// The code was free and the new link is now stored.
    Created(Link),
    /// The code was already taken; the stored link is returned untouched.
    Existing(Link),
}

impl Insertion {
    pub fn link(&self) -> &Link {
        match self {
            Self::Created(link) | Self::Existing(link) => link,
        }
    }

    pub fn into_link(self) -> Link {
        match self {
            Self::Created(link) | Self::Existing(link) => link,
        }
    }
}

/// Repository interface for the link registry.
///
/// Every method that reads and then mutates a record must do so atomically
/// with respect to the same code: two concurrent inserts of one code can
/// never both observe it as free, and concurrent clicks are never lost.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores `new_link` unless its code is already registered.
    ///
    /// # Returns
    ///
    /// - `Insertion::Created` with the stored link if the code was free
    /// - `Insertion::Existing` with the current record otherwise (no mutation)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    async fn insert_or_get(&self, new_link: NewLink) -> Result<Insertion, AppError>;

    /// Counts a visit to `code` at time `at` and returns the updated link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Expired`] if the link expired at or before `at`;
    /// the record is left unchanged in that case.
    async fn record_click(&self, code: &str, at: DateTime<Utc>) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found, expired or not
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts registered links, expired ones included.
    async fn count(&self) -> Result<usize, AppError>;
}
