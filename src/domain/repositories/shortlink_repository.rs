//! Repository trait for shortlink persistence.

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate};
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Store interface owning all persisted shortlink state.
///
/// Every method is a single round trip to the backing store. Create, update
/// and redirect resolution are atomic there: uniqueness of `short` is enforced
/// by the store's constraint at write time, never by a separate lookup, and
/// concurrent redirects never lose increments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoShortlinkRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::InMemoryShortlinkRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortlinkRepository: Send + Sync {
    /// Returns every shortlink in natural store order.
    ///
    /// An empty store yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    async fn list_all(&self) -> Result<Vec<Shortlink>, StoreError>;

    /// Finds the shortlink with the given short key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no shortlink matches.
    async fn find_by_short(&self, short: &str) -> Result<Shortlink, StoreError>;

    /// Persists a new shortlink.
    ///
    /// The store assigns `id`, sets `created_at` and `updated_at` to now and
    /// starts `access_count` at zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if the short key is already taken.
    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, StoreError>;

    /// Replaces the mutable fields of the shortlink currently keyed by `short`
    /// and refreshes `updated_at`, returning the updated entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing matches `short`.
    /// Returns [`StoreError::Duplicate`] if `update.short` belongs to another shortlink.
    async fn update(&self, short: &str, update: ShortlinkUpdate)
    -> Result<Shortlink, StoreError>;

    /// Removes the shortlink keyed by `short` and returns how many were removed.
    ///
    /// A missing key is not an error: the count is simply zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    async fn delete(&self, short: &str) -> Result<u64, StoreError>;

    /// Increments `access_count` by one and returns the target URL.
    ///
    /// Leaves `updated_at` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing matches `short`.
    async fn resolve_redirect(&self, short: &str) -> Result<String, StoreError>;

    /// Returns `true` when no shortlink uses `short`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    async fn is_free(&self, short: &str) -> Result<bool, StoreError>;
}
