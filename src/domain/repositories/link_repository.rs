//! Repository trait for short link data access.

use std::collections::BTreeMap;

use crate::domain::entities::{DomainCount, Link};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links and per-domain counters.
///
/// Implementations must be safe to share between request tasks. Reads may run
/// concurrently with each other; writes are exclusive.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a link and increments the counter of its domain label.
    ///
    /// An existing link with the same code is replaced without notice.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds the first link whose original URL equals `long_url` exactly.
    ///
    /// Used to hand out the same short code for a URL shortened twice.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Copies all code to original URL mappings.
    async fn snapshot(&self) -> Result<BTreeMap<String, String>, AppError>;

    /// Returns at most `limit` domains ordered by count, highest first.
    ///
    /// Equal counts are ordered by domain name.
    async fn ranked_domains(&self, limit: usize) -> Result<Vec<DomainCount>, AppError>;

    /// Number of stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
