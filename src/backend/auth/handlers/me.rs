/**
 * Get Current User Handler
 *
 * GET /api/me returns the identity the auth middleware verified for this
 * request. It reads the typed `AuthUser` extension and never touches the
 * Authorization header itself.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "userId": "123e4567-e89b-12d3-a456-426614174000"
/// }
/// ```
pub async fn get_me(AuthUser(user): AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: user.user_id,
    })
}
