//! Handler for short key availability.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::FreeResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validation::validate_short;

/// Reports whether a short key is unused.
///
/// # Endpoint
///
/// `GET /check/{short}`
///
/// The answer is advisory; a later create can still conflict.
pub async fn check_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FreeResponse>, AppError> {
    validate_short(&short)?;

    let free = state.shortlink_service.is_free(&short).await?;

    Ok(Json(FreeResponse { free }))
}
