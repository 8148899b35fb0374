//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod check;
pub mod redirect;
pub mod shortlinks;

pub use check::check_handler;
pub use redirect::redirect_handler;
pub use shortlinks::{
    create_shortlink_handler, delete_shortlink_handler, get_shortlink_handler,
    list_shortlinks_handler, update_shortlink_handler,
};
