//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validation::validate_short;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /go/{short}`
///
/// Each successful resolution increments the shortlink's access count in
/// the same store round trip that reads the target.
///
/// # Errors
///
/// Returns 400 Bad Request if `short` is malformed.
/// Returns 404 Not Found with `no redirect for <short>` if the key is unknown.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    validate_short(&short)?;

    let long = state.shortlink_service.resolve_redirect(&short).await?;
    tracing::debug!(short = %short, long = %long, "Redirecting");

    Ok(Redirect::temporary(&long))
}
