//! Shortlink entity pairing a short key with its target URL.

use chrono::{DateTime, SubsecRound, Utc};

/// A persisted shortlink with its metadata.
///
/// `id`, `created_at` and `access_count` are owned by the store: updates never
/// change them and only redirect resolution moves the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortlink {
    pub id: String,
    pub short: String,
    pub long: String,
    pub description: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shortlink {
    /// Creates a new Shortlink instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        short: String,
        long: String,
        description: String,
        access_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short,
            long,
            description,
            access_count,
            created_at,
            updated_at,
        }
    }

    /// Builds a freshly created shortlink: counter at zero, both timestamps `now`.
    pub fn from_new(id: String, new_shortlink: NewShortlink, now: DateTime<Utc>) -> Self {
        Self {
            id,
            short: new_shortlink.short,
            long: new_shortlink.long,
            description: new_shortlink.description,
            access_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an update in place, leaving `id`, `created_at` and `access_count` alone.
    pub fn apply(&mut self, update: ShortlinkUpdate, now: DateTime<Utc>) {
        self.short = update.short;
        self.long = update.long;
        self.description = update.description;
        self.updated_at = now;
    }
}

/// Caller-supplied fields for creating a shortlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortlink {
    pub short: String,
    pub long: String,
    pub description: String,
}

/// Replacement payload for the mutable fields of a shortlink.
///
/// `short` may differ from the key the update is addressed to, which renames
/// the shortlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlinkUpdate {
    pub short: String,
    pub long: String,
    pub description: String,
}

/// Current time at the precision the document store keeps (milliseconds).
///
/// Timestamps are truncated before they are written so a value read back
/// compares equal to the value that was stored.
pub fn store_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
