//! Link creation and retrieval service.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and retrieving shortened links.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns a short link for `long_url`.
    ///
    /// # Deduplication
    ///
    /// If the exact same string was shortened before, the existing link is
    /// returned and nothing is written. No normalization happens, so
    /// `http://a.com` and `http://a.com/` get different codes.
    ///
    /// # Code Generation
    ///
    /// New links get a random 7-character code. The code is not checked
    /// against existing ones; a collision replaces the older mapping.
    pub async fn shorten(&self, long_url: String) -> Result<Link, AppError> {
        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            debug!(code = %existing.code, "URL already shortened");
            return Ok(existing);
        }

        let link = Link::new(generate_code(), long_url);
        self.repository.insert(link.clone()).await?;

        let total = self.repository.count().await?;
        info!(code = %link.code, long_url = %link.long_url, total, "Short link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Lists every stored mapping, keyed by short code.
    pub async fn list(&self) -> Result<BTreeMap<String, String>, AppError> {
        self.repository.snapshot().await
    }
}
