//! Repository trait definitions for the domain layer.
//!
//! The traits abstract data access; concrete implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/repository_shortlink.rs` for the MongoDB contract tests.

pub mod shortlink_repository;

pub use shortlink_repository::ShortlinkRepository;

#[cfg(test)]
pub use shortlink_repository::MockShortlinkRepository;
