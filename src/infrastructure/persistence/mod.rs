//! Storage implementations of the domain repositories.
//!
//! State lives for the lifetime of the process only; a restart discards
//! every link and counter.

mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
