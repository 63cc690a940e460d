//! Authentication Middleware
//!
//! Resolves the `Authorization` header to a user before protected handlers
//! run.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::handlers::AppState;
use crate::models::user::UserRecord;
use crate::utils::error::AppError;

/// Extension type for storing the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserRecord);

/// Authentication middleware that validates session tokens
///
/// This middleware:
/// 1. Reads the Authorization header (raw token or `Bearer <token>`)
/// 2. Resolves it through the session service
/// 3. Adds the user to request extensions for use in handlers
///
/// A missing, blank or unknown token returns 401 Unauthorized.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let user = state
        .session_service
        .authenticate(token)
        .await?
        .ok_or_else(|| AppError::Authentication("Invalid or missing token".into()))?;

    request.extensions_mut().insert(AuthUser(user));

    Ok(next.run(request).await)
}

/// Helper function to extract the authenticated user from request extensions
///
/// The auth_middleware must be applied to the route for this to work.
pub fn extract_auth_user(request: &Request) -> Result<&UserRecord, AppError> {
    request
        .extensions()
        .get::<AuthUser>()
        .map(|auth_user| &auth_user.0)
        .ok_or_else(|| AppError::Authentication("User not found in request extensions".into()))
}
