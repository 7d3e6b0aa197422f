//! In-memory implementation of [`LinkRepository`].

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{DomainCount, Link};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::extract_domain::extract_domain;

#[derive(Debug, Default)]
struct Store {
    /// code -> original URL
    links: HashMap<String, String>,
    /// domain label -> number of links shortened for it
    domain_counts: HashMap<String, u64>,
}

/// Link store guarded by a single reader/writer lock.
///
/// Both maps sit behind the same lock so an insert and its counter update are
/// observed together. The lock is never held across an await on anything but
/// the lock itself.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    store: RwLock<Store>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: Link) -> Result<(), AppError> {
        let domain = extract_domain(&link.long_url);

        let mut store = self.store.write().await;
        store.links.insert(link.code, link.long_url);
        *store.domain_counts.entry(domain).or_insert(0) += 1;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .links
            .get(code)
            .map(|long_url| Link::new(code, long_url.as_str())))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .links
            .iter()
            .find(|(_, original)| original.as_str() == long_url)
            .map(|(code, original)| Link::new(code.as_str(), original.as_str())))
    }

    async fn snapshot(&self) -> Result<BTreeMap<String, String>, AppError> {
        let store = self.store.read().await;

        Ok(store
            .links
            .iter()
            .map(|(code, long_url)| (code.clone(), long_url.clone()))
            .collect())
    }

    async fn ranked_domains(&self, limit: usize) -> Result<Vec<DomainCount>, AppError> {
        let mut domains: Vec<DomainCount> = {
            let store = self.store.read().await;
            store
                .domain_counts
                .iter()
                .map(|(domain, count)| DomainCount::new(domain.as_str(), *count))
                .collect()
        };

        domains.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        domains.truncate(limit);

        Ok(domains)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.read().await.links.len())
    }
}
