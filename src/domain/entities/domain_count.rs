//! Per-domain usage counter.

/// How many links were shortened for a domain label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}
