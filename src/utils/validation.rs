//! Syntax checks for short keys and redirect targets.
//!
//! Both checks run in the API layer before any store call. The `*_field`
//! variants plug into `validator` derives on request DTOs; the `validate_*`
//! variants are used directly on path parameters.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;
use validator::ValidationError;

use crate::error::AppError;

/// Pattern every short key must match.
pub const SHORT_PATTERN: &str = r"^[a-zA-Z0-9\-_]+$";

/// Message returned for short keys that do not match [`SHORT_PATTERN`].
pub const INVALID_SHORT_MESSAGE: &str = r"invalid short does not match ^[a-zA-Z0-9\-_]+$";

/// Message returned for unusable redirect targets.
pub const INVALID_URL_MESSAGE: &str = "invalid redirect url";

static SHORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHORT_PATTERN).expect("short key pattern compiles"));

/// Returns true if `input` is a non-empty run of ASCII letters, digits, `-` or `_`.
pub fn is_valid_short(input: &str) -> bool {
    SHORT_REGEX.is_match(input)
}

/// Returns true if `input` is an absolute URL with a scheme and a non-empty host.
///
/// Relative paths, scheme-less strings and host-less URIs such as
/// `mailto:` addresses are rejected. The input is stored and later sent as
/// a `Location` header verbatim, so it must already be printable ASCII with
/// an explicit `scheme://` authority; the lenient parser is never allowed to
/// repair it.
pub fn is_valid_redirect_url(input: &str) -> bool {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_graphic()) {
        return false;
    }

    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    match Url::parse(input) {
        Ok(url) => {
            url.scheme().eq_ignore_ascii_case(scheme)
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Validates a short key taken from a request path.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with [`INVALID_SHORT_MESSAGE`].
pub fn validate_short(input: &str) -> Result<(), AppError> {
    if is_valid_short(input) {
        Ok(())
    } else {
        tracing::debug!(short = input, "Rejected invalid short");
        Err(AppError::bad_request(INVALID_SHORT_MESSAGE))
    }
}

/// Validates a redirect target.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with [`INVALID_URL_MESSAGE`].
pub fn validate_redirect_url(input: &str) -> Result<(), AppError> {
    if is_valid_redirect_url(input) {
        Ok(())
    } else {
        tracing::debug!(url = input, "Rejected invalid redirect url");
        Err(AppError::bad_request(INVALID_URL_MESSAGE))
    }
}

/// `validator` hook for `short` fields.
pub fn short_field(input: &str) -> Result<(), ValidationError> {
    if is_valid_short(input) {
        Ok(())
    } else {
        Err(ValidationError::new("short").with_message(Cow::Borrowed(INVALID_SHORT_MESSAGE)))
    }
}

/// `validator` hook for `long` fields.
pub fn redirect_url_field(input: &str) -> Result<(), ValidationError> {
    if is_valid_redirect_url(input) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed(INVALID_URL_MESSAGE)))
    }
}
