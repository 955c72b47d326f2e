/**
 * Router Configuration
 *
 * Combines the route tables into one Axum router and applies the
 * service-wide layers.
 *
 * # Layers
 *
 * - `DefaultBodyLimit` caps request bodies at 10 MiB
 * - `CorsLayer::permissive()` for browser clients
 * - `TraceLayer` opens a span per request
 *
 * Unknown routes fall back to a JSON 404.
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::catalog::MAX_UPLOAD_BYTES;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
