//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and listing
//! - [`services::stats_service::StatsService`] - Per-domain usage ranking

pub mod services;
