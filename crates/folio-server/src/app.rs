//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::note_files;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/notes", get(handlers::notes::list_notes))
        .route("/api/notes/{name}", get(handlers::notes::get_note));

    // Raw note files; resolved image URLs point here
    let router = Router::new()
        .merge(api_routes)
        .route("/note/{*path}", get(note_files::serve_note_file));

    // Static files and SPA fallback
    let router = router.merge(static_files::static_router());

    // Add security headers middleware
    router
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
