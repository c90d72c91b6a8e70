//! HTTP request handlers.

pub(crate) mod notes;

use axum::http::header;

/// Cache-Control header pair for API responses.
///
/// The viewer re-fetches on every open, so responses must not be cached.
pub(crate) fn no_store() -> [(header::HeaderName, &'static str); 1] {
    [(header::CACHE_CONTROL, "no-store")]
}
