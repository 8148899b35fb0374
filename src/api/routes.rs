//! API route configuration.

use axum::{Router, routing::get};

use crate::api::handlers::{
    check_handler, create_shortlink_handler, delete_shortlink_handler, get_shortlink_handler,
    list_shortlinks_handler, redirect_handler, update_shortlink_handler,
};
use crate::state::AppState;

/// Shortlink management, redirect and availability routes.
///
/// # Endpoints
///
/// - `GET    /shortlinks`         - List all shortlinks
/// - `POST   /shortlinks`         - Create a shortlink
/// - `GET    /shortlinks/{short}` - Fetch one shortlink
/// - `PUT    /shortlinks/{short}` - Replace mutable fields, possibly renaming
/// - `DELETE /shortlinks/{short}` - Delete, returning the removed count
/// - `GET    /go/{short}`         - 307 redirect to the target URL
/// - `GET    /check/{short}`      - Short key availability
pub fn shortlink_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shortlinks",
            get(list_shortlinks_handler).post(create_shortlink_handler),
        )
        .route(
            "/shortlinks/{short}",
            get(get_shortlink_handler)
                .put(update_shortlink_handler)
                .delete(delete_shortlink_handler),
        )
        .route("/go/{short}", get(redirect_handler))
        .route("/check/{short}", get(check_handler))
}
