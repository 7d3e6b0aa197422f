//! # Shortener
//!
//! A minimal URL shortening service built with Axum. Links live in memory for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Shortening, lookup and ranking logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! | Method | Path            | Description                              |
//! |--------|-----------------|------------------------------------------|
//! | POST   | `/shorten`      | `{"url": ...}` → `{"short_url": <code>}` |
//! | GET    | `/{code}`       | 302 redirect to the original URL         |
//! | GET    | `/metrics`      | Top three domains as `domain: count, `   |
//! | GET    | `/metrics/list` | Every code and its original URL          |
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:8080/shorten -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables and [`cli`] for flags.

pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{DomainCount, Link};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
