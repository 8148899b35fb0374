//! Process-local implementation of the shortlink repository.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate, store_now};
use crate::domain::error::StoreError;
use crate::domain::repositories::ShortlinkRepository;

/// A shortlink store kept in memory.
///
/// Mutating operations hold the write lock across their whole
/// check-and-write, so short-key uniqueness and counter increments behave like
/// the atomic operations of the document store.
///
/// # Use Cases
///
/// - HTTP handler tests without a running MongoDB
/// - Local experiments where persistence is not needed
#[derive(Debug, Default)]
pub struct InMemoryShortlinkRepository {
    shortlinks: RwLock<Vec<Shortlink>>,
    next_id: AtomicU64,
}

impl InMemoryShortlinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory shortlink store");
        Self::default()
    }

    /// Number of stored shortlinks.
    pub async fn len(&self) -> usize {
        self.shortlinks.read().await.len()
    }

    /// Returns true if the store holds no shortlinks.
    pub async fn is_empty(&self) -> bool {
        self.shortlinks.read().await.is_empty()
    }

    fn generate_id(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{id:024x}")
    }
}

#[async_trait]
impl ShortlinkRepository for InMemoryShortlinkRepository {
    async fn list_all(&self) -> Result<Vec<Shortlink>, StoreError> {
        Ok(self.shortlinks.read().await.clone())
    }

    async fn find_by_short(&self, short: &str) -> Result<Shortlink, StoreError> {
        self.shortlinks
            .read()
            .await
            .iter()
            .find(|link| link.short == short)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, StoreError> {
        let mut shortlinks = self.shortlinks.write().await;

        if shortlinks.iter().any(|link| link.short == new_shortlink.short) {
            return Err(StoreError::Duplicate);
        }

        let shortlink = Shortlink::from_new(self.generate_id(), new_shortlink, store_now());
        shortlinks.push(shortlink.clone());

        Ok(shortlink)
    }

    async fn update(
        &self,
        short: &str,
        update: ShortlinkUpdate,
    ) -> Result<Shortlink, StoreError> {
        let mut shortlinks = self.shortlinks.write().await;

        let position = shortlinks
            .iter()
            .position(|link| link.short == short)
            .ok_or(StoreError::NotFound)?;

        let collides = shortlinks
            .iter()
            .enumerate()
            .any(|(i, link)| i != position && link.short == update.short);
        if collides {
            return Err(StoreError::Duplicate);
        }

        let shortlink = &mut shortlinks[position];
        shortlink.apply(update, store_now());

        Ok(shortlink.clone())
    }

    async fn delete(&self, short: &str) -> Result<u64, StoreError> {
        let mut shortlinks = self.shortlinks.write().await;
        let before = shortlinks.len();
        shortlinks.retain(|link| link.short != short);

        Ok((before - shortlinks.len()) as u64)
    }

    async fn resolve_redirect(&self, short: &str) -> Result<String, StoreError> {
        let mut shortlinks = self.shortlinks.write().await;

        let shortlink = shortlinks
            .iter_mut()
            .find(|link| link.short == short)
            .ok_or(StoreError::NotFound)?;
        shortlink.access_count += 1;

        Ok(shortlink.long.clone())
    }

    async fn is_free(&self, short: &str) -> Result<bool, StoreError> {
        Ok(!self
            .shortlinks
            .read()
            .await
            .iter()
            .any(|link| link.short == short))
    }
}
