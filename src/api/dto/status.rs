//! Small status payloads.

use serde::{Deserialize, Serialize};

/// Response body for `DELETE /shortlinks/{short}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

/// Response body for `GET /check/{short}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeResponse {
    pub free: bool,
}
