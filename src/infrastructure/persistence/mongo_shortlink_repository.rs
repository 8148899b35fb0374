//! MongoDB implementation of the shortlink repository.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate, store_now};
use crate::domain::error::StoreError;
use crate::domain::repositories::ShortlinkRepository;

/// Server error code for unique index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Shortlink as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShortlinkDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    short: String,
    long: String,
    #[serde(default)]
    descr: String,
    #[serde(default)]
    access_count: i64,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<ShortlinkDocument> for Shortlink {
    fn from(document: ShortlinkDocument) -> Self {
        Shortlink::new(
            document.id.to_hex(),
            document.short,
            document.long,
            document.descr,
            document.access_count,
            to_chrono(document.created_at),
            to_chrono(document.updated_at),
        )
    }
}

/// Projection of the single field returned by redirect resolution.
#[derive(Debug, Deserialize)]
struct RedirectTarget {
    long: String,
}

fn to_bson(time: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(time.timestamp_millis())
}

fn to_chrono(time: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(time.timestamp_millis()).unwrap_or_default()
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        if is_duplicate_key(&e) {
            StoreError::Duplicate
        } else {
            StoreError::Unexpected(e.to_string())
        }
    }
}

/// MongoDB-backed shortlink store.
///
/// Holds the pooled client and the collection handle; both are cheap to clone
/// and safe to share between request tasks without extra locking.
#[derive(Clone)]
pub struct MongoShortlinkRepository {
    client: Client,
    collection: Collection<ShortlinkDocument>,
    timeout: Duration,
}

impl MongoShortlinkRepository {
    /// Connects to MongoDB, verifies the server responds, and ensures the
    /// unique index on `short` exists.
    ///
    /// The client is shut down again if the ping or index creation fails, so
    /// a failed startup leaves no open connections behind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] if the URI is invalid, the server
    /// cannot be reached within `timeout`, or the index cannot be created.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let repository = Self {
            collection: client.database(database).collection(collection),
            client,
            timeout,
        };

        if let Err(e) = repository.initialize().await {
            tracing::error!(error = %e, "Failed to initialise MongoDB store");
            repository.disconnect().await;
            return Err(e);
        }

        tracing::info!(database, collection, "Connected to MongoDB");
        Ok(repository)
    }

    async fn initialize(&self) -> Result<(), StoreError> {
        self.ping().await?;

        let index = IndexModel::builder()
            .keys(doc! { "short": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.bounded(self.collection.create_index(index)).await?;

        Ok(())
    }

    /// Sends a `ping` command to the server.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] if the server does not answer in time.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(
            self.client
                .database("admin")
                .run_command(doc! { "ping": 1 }),
        )
        .await?;
        Ok(())
    }

    /// Returns the number of stored shortlinks.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    pub async fn count(&self) -> Result<u64, StoreError> {
        self.bounded(self.collection.count_documents(doc! {})).await
    }

    /// Deletes every shortlink without a timeout and returns how many were removed.
    ///
    /// Intended for administrative tooling and test teardown only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    pub async fn purge(&self) -> Result<u64, StoreError> {
        let result = self.collection.delete_many(doc! {}).await?;
        tracing::warn!(deleted = result.deleted_count, "Purged all shortlinks");
        Ok(result.deleted_count)
    }

    /// Drops the whole collection, including its index, without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unexpected`] on store failures.
    pub async fn drop_collection(&self) -> Result<(), StoreError> {
        self.collection.drop().await?;
        Ok(())
    }

    /// Closes all pooled connections.
    pub async fn disconnect(&self) {
        tracing::info!("Disconnecting MongoDB");
        self.client.clone().shutdown().await;
    }

    /// Runs one store operation under the configured timeout.
    ///
    /// An elapsed timeout surfaces as [`StoreError::Unexpected`].
    async fn bounded<T, F>(&self, operation: F) -> Result<T, StoreError>
    where
        F: IntoFuture<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => Err(StoreError::unexpected(format!(
                "store operation timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

#[async_trait]
impl ShortlinkRepository for MongoShortlinkRepository {
    async fn list_all(&self) -> Result<Vec<Shortlink>, StoreError> {
        let documents: Vec<ShortlinkDocument> = self
            .bounded(async {
                let cursor = self.collection.find(doc! {}).await?;
                cursor.try_collect::<Vec<ShortlinkDocument>>().await
            })
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error receiving all shortlinks"))?;

        Ok(documents.into_iter().map(Shortlink::from).collect())
    }

    async fn find_by_short(&self, short: &str) -> Result<Shortlink, StoreError> {
        let document = self
            .bounded(self.collection.find_one(doc! { "short": short }))
            .await
            .inspect_err(|e| tracing::error!(short, error = %e, "Error finding shortlink"))?;

        document.map(Shortlink::from).ok_or(StoreError::NotFound)
    }

    async fn create(&self, new_shortlink: NewShortlink) -> Result<Shortlink, StoreError> {
        let now = store_now();
        let document = ShortlinkDocument {
            id: ObjectId::new(),
            short: new_shortlink.short,
            long: new_shortlink.long,
            descr: new_shortlink.description,
            access_count: 0,
            created_at: to_bson(now),
            updated_at: to_bson(now),
        };

        self.bounded(self.collection.insert_one(&document))
            .await
            .inspect_err(|e| {
                tracing::warn!(short = %document.short, error = %e, "Error creating shortlink")
            })?;

        Ok(Shortlink::from(document))
    }

    async fn update(
        &self,
        short: &str,
        update: ShortlinkUpdate,
    ) -> Result<Shortlink, StoreError> {
        let changes = doc! {
            "$set": {
                "short": update.short,
                "long": update.long,
                "descr": update.description,
                "updated_at": to_bson(store_now()),
            }
        };

        let document = self
            .bounded(
                self.collection
                    .find_one_and_update(doc! { "short": short }, changes)
                    .return_document(ReturnDocument::After)
                    .upsert(false),
            )
            .await
            .inspect_err(|e| tracing::warn!(short, error = %e, "Error updating shortlink"))?;

        document.map(Shortlink::from).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, short: &str) -> Result<u64, StoreError> {
        let result = self
            .bounded(self.collection.delete_many(doc! { "short": short }))
            .await
            .inspect_err(|e| tracing::error!(short, error = %e, "Error deleting shortlink"))?;

        Ok(result.deleted_count)
    }

    async fn resolve_redirect(&self, short: &str) -> Result<String, StoreError> {
        let target = self
            .bounded(
                self.collection
                    .clone_with_type::<RedirectTarget>()
                    .find_one_and_update(
                        doc! { "short": short },
                        doc! { "$inc": { "access_count": 1 } },
                    )
                    .return_document(ReturnDocument::After)
                    .upsert(false)
                    .projection(doc! { "_id": 0, "long": 1 }),
            )
            .await
            .inspect_err(|e| tracing::error!(short, error = %e, "Error resolving redirect"))?;

        target.map(|t| t.long).ok_or(StoreError::NotFound)
    }

    async fn is_free(&self, short: &str) -> Result<bool, StoreError> {
        let existing: Option<Document> = self
            .bounded(
                self.collection
                    .clone_with_type::<Document>()
                    .find_one(doc! { "short": short })
                    .projection(doc! { "_id": 1 }),
            )
            .await
            .inspect_err(|e| tracing::error!(short, error = %e, "Error checking for free short"))?;

        Ok(existing.is_none())
    }
}
