//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod shortlink;
pub mod status;

pub use shortlink::{CreateShortlinkRequest, ShortlinkResponse, UpdateShortlinkRequest};
pub use status::{DeletedResponse, FreeResponse};
