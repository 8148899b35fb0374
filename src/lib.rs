//! # shorty
//!
//! A mnemonic URL shortener with CRUD management, built with Axum and MongoDB.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Shortlink entity, store errors and the repository trait
//! - **Application Layer** ([`application`]) - Service orchestration over the repository
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Human-chosen short keys, unique per collection
//! - Atomic access counting on redirect
//! - Rename via update, keeping counters and creation time
//! - Graceful shutdown on SIGINT/SIGTERM
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGO_URL="mongodb://localhost:27017"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortlinkService;
    pub use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate};
    pub use crate::domain::error::StoreError;
    pub use crate::domain::repositories::ShortlinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemoryShortlinkRepository, MongoShortlinkRepository,
    };
    pub use crate::state::AppState;
}
