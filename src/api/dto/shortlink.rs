//! DTOs for shortlink management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewShortlink, Shortlink, ShortlinkUpdate};

/// Request body for `POST /shortlinks`.
///
/// Missing `short` or `long` deserialize as empty strings and are then
/// rejected by validation with the usual field message.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortlinkRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::short_field"))]
    pub short: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::redirect_url_field"))]
    pub long: String,

    /// Free text; absent or `null` means empty.
    #[serde(default)]
    pub descr: Option<String>,
}

impl From<CreateShortlinkRequest> for NewShortlink {
    fn from(req: CreateShortlinkRequest) -> Self {
        NewShortlink {
            short: req.short,
            long: req.long,
            description: req.descr.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /shortlinks/{short}`.
///
/// Carries only the mutable fields. `short` may differ from the path key,
/// in which case the shortlink is renamed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShortlinkRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::short_field"))]
    pub short: String,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validation::redirect_url_field"))]
    pub long: String,

    #[serde(default)]
    pub descr: Option<String>,
}

impl From<UpdateShortlinkRequest> for ShortlinkUpdate {
    fn from(req: UpdateShortlinkRequest) -> Self {
        ShortlinkUpdate {
            short: req.short,
            long: req.long,
            description: req.descr.unwrap_or_default(),
        }
    }
}

/// JSON representation of a shortlink. The store id is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlinkResponse {
    pub short: String,
    pub long: String,
    pub descr: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Shortlink> for ShortlinkResponse {
    fn from(link: Shortlink) -> Self {
        Self {
            short: link.short,
            long: link.long,
            descr: link.description,
            access_count: link.access_count,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
