//! Core domain entities.
//!
//! The service has a single persistent entity, [`Shortlink`]. Creation and
//! update inputs are separate types so that store-owned fields (`id`,
//! timestamps, `access_count`) can never be supplied by a caller:
//!
//! - [`NewShortlink`] - fields accepted on creation
//! - [`ShortlinkUpdate`] - mutable fields replaced on update

pub mod shortlink;

pub use shortlink::{NewShortlink, Shortlink, ShortlinkUpdate, store_now};
