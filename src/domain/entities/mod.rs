//! Core domain entities.
//!
//! - [`Link`] - A short code to original URL mapping
//! - [`DomainCount`] - Number of links shortened for a domain label

pub mod domain_count;
pub mod link;

pub use domain_count::DomainCount;
pub use link::Link;
