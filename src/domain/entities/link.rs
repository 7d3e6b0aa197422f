//! Link entity representing a shortened URL mapping.

/// A short code and the original URL it redirects to.
///
/// The original URL is stored verbatim; it is never validated or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}
