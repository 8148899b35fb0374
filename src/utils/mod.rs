//! Helper functions used across the application.
//!
//! - [`validation`] - Short key and redirect URL syntax checks

pub mod validation;
