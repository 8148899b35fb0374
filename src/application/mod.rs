//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortlink_service::ShortlinkService`] - Shortlink CRUD, redirects and availability

pub mod services;
