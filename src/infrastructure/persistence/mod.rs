//! Shortlink store implementations.
//!
//! # Repositories
//!
//! - [`MongoShortlinkRepository`] - MongoDB collection with a unique index on `short`
//! - [`InMemoryShortlinkRepository`] - process-local store used by tests

pub mod memory_shortlink_repository;
pub mod mongo_shortlink_repository;

pub use memory_shortlink_repository::InMemoryShortlinkRepository;
pub use mongo_shortlink_repository::MongoShortlinkRepository;
