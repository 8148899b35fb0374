//! Handlers for shortlink management endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{
    CreateShortlinkRequest, DeletedResponse, ShortlinkResponse, UpdateShortlinkRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validation::validate_short;

/// Lists every shortlink.
///
/// # Endpoint
///
/// `GET /shortlinks`
///
/// Returns `[]` when the store is empty.
pub async fn list_shortlinks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortlinkResponse>>, AppError> {
    let links = state.shortlink_service.list_shortlinks().await?;

    Ok(Json(links.into_iter().map(ShortlinkResponse::from).collect()))
}

/// Returns a single shortlink.
///
/// # Endpoint
///
/// `GET /shortlinks/{short}`
///
/// # Errors
///
/// Returns 400 Bad Request if `short` is malformed.
/// Returns 404 Not Found if the shortlink does not exist.
pub async fn get_shortlink_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortlinkResponse>, AppError> {
    validate_short(&short)?;

    let link = state.shortlink_service.get_shortlink(&short).await?;

    Ok(Json(link.into()))
}

/// Creates a shortlink.
///
/// # Endpoint
///
/// `POST /shortlinks`
///
/// # Request Body
///
/// ```json
/// {
///   "short": "docs",
///   "long": "https://example.com/documentation",
///   "descr": "optional free text"
/// }
/// ```
///
/// Responds with `201 Created` and an empty body.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an invalid `short` or an invalid `long`.
/// Returns 409 Conflict if `short` is already taken.
pub async fn create_shortlink_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortlinkRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state
        .shortlink_service
        .create_shortlink(payload.into())
        .await?;

    Ok(StatusCode::CREATED)
}

/// Replaces `short`, `long` and `descr` of an existing shortlink.
///
/// # Endpoint
///
/// `PUT /shortlinks/{short}`
///
/// A body `short` different from the path renames the shortlink; the
/// access count and creation time carry over.
///
/// # Errors
///
/// Returns 400 Bad Request if the path key, body key or URL is invalid.
/// Returns 404 Not Found if the path key does not exist.
/// Returns 409 Conflict if the new key belongs to another shortlink.
pub async fn update_shortlink_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateShortlinkRequest>, JsonRejection>,
) -> Result<Json<ShortlinkResponse>, AppError> {
    validate_short(&short)?;
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .shortlink_service
        .update_shortlink(&short, payload.into())
        .await?;

    Ok(Json(link.into()))
}

/// Deletes a shortlink.
///
/// # Endpoint
///
/// `DELETE /shortlinks/{short}`
///
/// Always responds 200 with the number of removed shortlinks, so deleting
/// an unknown key yields `{"deleted": 0}` rather than 404.
pub async fn delete_shortlink_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    validate_short(&short)?;

    let deleted = state.shortlink_service.delete_shortlink(&short).await?;

    Ok(Json(DeletedResponse { deleted }))
}
