//! Link creation, resolution and statistics service.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{Insertion, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, hash_code, validate_custom_code};

/// Largest accepted TTL: 100 years.
pub const MAX_TTL_MINUTES: i64 = 100 * 365 * 24 * 60;

/// Input for [`LinkService::create_short_link`].
#[derive(Debug, Clone, Default)]
pub struct CreateLink {
    pub target_url: String,
    pub custom_alias: Option<String>,
    pub ttl_minutes: Option<i64>,
    /// Draw a random code instead of hashing the URL. Ignored when
    /// `custom_alias` is set.
    pub random_alias: bool,
}

impl CreateLink {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.custom_alias = Some(alias.into());
        self
    }

    pub fn with_ttl_minutes(mut self, ttl_minutes: i64) -> Self {
        self.ttl_minutes = Some(ttl_minutes);
        self
    }

    pub fn with_random_alias(mut self) -> Self {
        self.random_alias = true;
        self
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub code: String,
    pub short_url: String,
    pub expires_at: Option<DateTime<Utc>>,
    /// False when the call matched an existing mapping for the same URL.
    pub created: bool,
}

/// Service implementing the three registry operations: create, resolve and stats.
///
/// # Identifier Selection
///
/// - A custom alias is used verbatim after validation
/// - With `random_alias`, a random 6-character code is drawn (retried on collision)
/// - Otherwise the code is the first 6 hex digits of SHA-256 of the target URL
///
/// # Conflict Policy
///
/// Registering a code that is already bound to the same URL returns the
/// existing mapping untouched. Registering it for a different URL fails
/// with [`AppError::AliasConflict`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    short_link_base: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service producing `/{code}` short links.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            short_link_base: String::new(),
        }
    }

    /// Sets the prefix placed before `/{code}` in returned short links.
    pub fn with_short_link_base(mut self, base: impl Into<String>) -> Self {
        self.short_link_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Registers a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if:
    /// - the URL is empty after trimming or contains control characters
    /// - the custom alias is malformed or reserved
    /// - the TTL is negative or larger than [`MAX_TTL_MINUTES`]
    ///
    /// Returns [`AppError::AliasConflict`] if the code is bound to a different URL.
    ///
    /// Returns [`AppError::Internal`] if no free random code could be found.
    pub async fn create_short_link(&self, input: CreateLink) -> Result<CreatedLink, AppError> {
        let target_url = input.target_url.trim();
        if target_url.is_empty() {
            return Err(AppError::invalid_input("url is required", json!({})));
        }
        if target_url.chars().any(char::is_control) {
            return Err(AppError::invalid_input(
                "url must not contain control characters",
                json!({ "field": "url" }),
            ));
        }

        let custom_alias = input.custom_alias.filter(|alias| !alias.is_empty());
        if let Some(alias) = &custom_alias {
            validate_custom_code(alias)?;
        }

        let created_at = Utc::now();
        let expires_at = match input.ttl_minutes {
            Some(ttl) => Some(expiry_from_ttl(created_at, ttl)?),
            None => None,
        };

        let insertion = match custom_alias {
            Some(alias) => {
                self.insert_checked(NewLink {
                    code: alias,
                    target_url: target_url.to_string(),
                    created_at,
                    expires_at,
                })
                .await?
            }
            None if input.random_alias => {
                self.insert_random(target_url, created_at, expires_at)
                    .await?
            }
            None => {
                self.insert_checked(NewLink {
                    code: hash_code(target_url),
                    target_url: target_url.to_string(),
                    created_at,
                    expires_at,
                })
                .await?
            }
        };

        let created = matches!(insertion, Insertion::Created(_));
        let link = insertion.into_link();

        if created {
            info!(code = %link.code, target = %link.target_url, expires_at = ?link.expires_at, "Short link created");
        } else {
            debug!(code = %link.code, "Short link already registered for this URL");
        }

        Ok(CreatedLink {
            short_url: self.short_url(&link.code),
            code: link.code,
            expires_at: link.expires_at,
            created,
        })
    }

    /// Resolves a code to its target URL, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] for links past their expiry. Neither case
    /// changes the stored counters.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.link_repository.record_click(code, Utc::now()).await {
            Ok(link) => {
                debug!(code, clicks = link.click_count, "Short link resolved");
                Ok(link.target_url)
            }
            Err(err) => {
                if let AppError::Expired { .. } = err {
                    info!(code, "Rejected visit to expired link");
                }
                Err(err)
            }
        }
    }

    /// Returns a snapshot of a link, expired links included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Number of registered links.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the short link for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.short_link_base, code)
    }

    /// Inserts a link whose code was chosen by the caller or derived from
    /// the URL, applying the conflict policy.
    async fn insert_checked(&self, new_link: NewLink) -> Result<Insertion, AppError> {
        let target_url = new_link.target_url.clone();
        let insertion = self.link_repository.insert_or_get(new_link).await?;

        if let Insertion::Existing(existing) = &insertion
            && existing.target_url != target_url
        {
            info!(code = %existing.code, "Alias conflict");
            return Err(AppError::alias_conflict(
                "Alias already in use",
                json!({ "alias": existing.code }),
            ));
        }

        Ok(insertion)
    }

    /// Inserts a link under a fresh random code.
    ///
    /// Attempts up to 10 times before failing.
    async fn insert_random(
        &self,
        target_url: &str,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Insertion, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                target_url: target_url.to_string(),
                created_at,
                expires_at,
            };

            match self.link_repository.insert_or_get(new_link).await? {
                created @ Insertion::Created(_) => return Ok(created),
                Insertion::Existing(taken) => {
                    debug!(code = %taken.code, "Random code collision, retrying");
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Computes the expiry for a TTL given in minutes.
///
/// A TTL of zero yields a link that expires at its creation instant.
fn expiry_from_ttl(created_at: DateTime<Utc>, ttl_minutes: i64) -> Result<DateTime<Utc>, AppError> {
    if !(0..=MAX_TTL_MINUTES).contains(&ttl_minutes) {
        return Err(AppError::invalid_input(
            format!("ttl must be between 0 and {MAX_TTL_MINUTES} minutes"),
            json!({ "ttl": ttl_minutes }),
        ));
    }

    TimeDelta::try_minutes(ttl_minutes)
        .and_then(|ttl| created_at.checked_add_signed(ttl))
        .ok_or_else(|| AppError::invalid_input("ttl is out of range", json!({ "ttl": ttl_minutes })))
}
