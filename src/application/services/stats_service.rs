//! Per-domain usage statistics.

use std::sync::Arc;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Number of domains reported by [`StatsService::top_domains_report`].
pub const TOP_DOMAINS: usize = 3;

/// Service ranking domains by how many links were shortened for them.
///
/// Counters are bumped when a new link is created, never on redirect.
pub struct StatsService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the `limit` most shortened domains, highest count first.
    pub async fn top_domains(&self, limit: usize) -> Result<Vec<DomainCount>, AppError> {
        self.repository.ranked_domains(limit).await
    }

    /// Renders the top domains as `"domain: count, "` entries.
    ///
    /// The trailing separator is kept and a newline terminates the report.
    pub async fn top_domains_report(&self) -> Result<String, AppError> {
        let domains = self.top_domains(TOP_DOMAINS).await?;
        Ok(format_report(&domains))
    }
}

fn format_report(domains: &[DomainCount]) -> String {
    let mut report: String = domains
        .iter()
        .map(|entry| format!("{}: {}, ", entry.domain, entry.count))
        .collect();
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[test]
    fn test_format_report() {
        let domains = vec![
            DomainCount::new("a", 3),
            DomainCount::new("b", 1),
            DomainCount::new("c", 1),
        ];

        assert_eq!(format_report(&domains), "a: 3, b: 1, c: 1, \n");
    }

    #[test]
    fn test_format_report_empty() {
        assert_eq!(format_report(&[]), "\n");
    }

    #[tokio::test]
    async fn test_top_domains_report_asks_for_three() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_ranked_domains()
            .withf(|limit| *limit == TOP_DOMAINS)
            .times(1)
            .returning(|_| Ok(vec![DomainCount::new("example", 2)]));

        let service = StatsService::new(Arc::new(mock_repo));

        let report = service.top_domains_report().await.unwrap();
        assert_eq!(report, "example: 2, \n");
    }
}
