//! Shortlink lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate};
use crate::domain::error::StoreError;
use crate::domain::repositories::ShortlinkRepository;
use crate::error::AppError;

/// Service for managing shortlinks and resolving redirects.
///
/// Each method performs exactly one store operation and translates the
/// store outcome into an [`AppError`]. Input syntax is checked by the API
/// layer before these methods are called.
pub struct ShortlinkService {
    repository: Arc<dyn ShortlinkRepository>,
}

impl ShortlinkService {
    /// Creates a new shortlink service.
    pub fn new(repository: Arc<dyn ShortlinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns every shortlink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_shortlinks(&self) -> Result<Vec<Shortlink>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Retrieves a shortlink by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no shortlink matches.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn get_shortlink(&self, short: &str) -> Result<Shortlink, AppError> {
        self.repository
            .find_by_short(short)
            .await
            .inspect_err(|e| tracing::debug!(short, error = %e, "Failed finding shortlink"))
            .map_err(AppError::from)
    }

    /// Creates a shortlink.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short key is already taken.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn create_shortlink(&self, new_shortlink: NewShortlink) -> Result<Shortlink, AppError> {
        let shortlink = self.repository.create(new_shortlink).await?;
        tracing::info!(short = %shortlink.short, "Created shortlink");
        Ok(shortlink)
    }

    /// Replaces the mutable fields of the shortlink keyed by `short`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `short` does not exist.
    /// Returns [`AppError::Conflict`] if the new short key belongs to another shortlink.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn update_shortlink(
        &self,
        short: &str,
        update: ShortlinkUpdate,
    ) -> Result<Shortlink, AppError> {
        let shortlink = self.repository.update(short, update).await?;
        tracing::info!(from = short, to = %shortlink.short, "Updated shortlink");
        Ok(shortlink)
    }

    /// Deletes the shortlink keyed by `short` and returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn delete_shortlink(&self, short: &str) -> Result<u64, AppError> {
        let deleted = self.repository.delete(short).await?;
        tracing::info!(short, deleted, "Deleted shortlink");
        Ok(deleted)
    }

    /// Resolves `short` to its target URL, counting the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with `no redirect for <short>` if the key is unknown.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve_redirect(&self, short: &str) -> Result<String, AppError> {
        self.repository
            .resolve_redirect(short)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => AppError::not_found(format!("no redirect for {short}")),
                other => AppError::from(other),
            })
    }

    /// Returns whether `short` is still unused.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn is_free(&self, short: &str) -> Result<bool, AppError> {
        Ok(self.repository.is_free(short).await?)
    }
}
