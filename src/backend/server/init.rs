/**
 * Server Initialization
 *
 * Builds the Axum application from a validated `ServerConfig`: opens the
 * database, creates the shared state and configures the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing storefront backend");

    let pool = load_database(&config.database_url).await?;

    let app_state = AppState::new(config, pool);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
