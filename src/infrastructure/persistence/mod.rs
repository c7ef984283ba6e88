//! Repository implementations.
//!
//! - [`InMemoryLinkRepository`] - Link registry kept in process memory

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
