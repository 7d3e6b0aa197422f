//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP layer or on any concrete
//! storage backend. Implementations of the repository traits live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
