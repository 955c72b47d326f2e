/**
 * API Routes
 *
 * Route tables for the public endpoints and the login-required endpoints.
 * Login-required routes get `require_login` as a route layer, so the
 * middleware only runs for requests that matched one of them.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::catalog::{add_product, delete_product, edit_product, get_all_products};
use crate::backend::middleware::require_login;
use crate::backend::server::state::AppState;

/// Routes open to anonymous callers
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout))
        .route("/api/getAllProducts", get(get_all_products))
}

/// Routes behind `Authorization: Bearer <token>`
pub fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/addProduct", post(add_product))
        .route("/api/editProduct/{id}", put(edit_product))
        .route("/api/deleteProduct/{id}", delete(delete_product))
        .route_layer(from_fn_with_state(app_state.clone(), require_login))
}

/// Add all API routes to `router`
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
