//! HTTP Request Handlers
//!
//! Axum handlers for processing HTTP requests and responses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderName, StatusCode},
    Extension, Json,
};
use chrono::Utc;

use crate::{
    api::{extract::AppJson, middleware::AuthUser},
    database::{DatabasePool, UserStore},
    models::{requests::*, user::User},
    service::{AccountService, ProfileService, SessionService},
    utils::error::{AppError, AppResult},
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub session_service: Arc<SessionService>,
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    /// Wires every service onto one shared store
    pub fn new(pool: DatabasePool) -> Self {
        let store = UserStore::new(pool);

        Self {
            account_service: Arc::new(AccountService::new(store.clone())),
            session_service: Arc::new(SessionService::new(store.clone())),
            profile_service: Arc::new(ProfileService::new(store)),
        }
    }
}

/// Response header carrying the caller's session token
type TokenHeader = [(HeaderName, String); 1];

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
    Extension(_caller): Extension<AuthUser>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.account_service.list_users().await?;
    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Register a new user
///
/// The body never carries the token, so it is returned in the
/// `Authorization` response header.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, TokenHeader, Json<User>)> {
    let user = state.account_service.create_user(request).await?;
    let header = [(AUTHORIZATION, user.token.clone())];

    Ok((StatusCode::CREATED, header, Json(user.into())))
}

/// Log in with username and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> AppResult<(TokenHeader, Json<User>)> {
    log::info!("Received request to login user: {}", request.username);

    let user = state
        .session_service
        .login(&request.username, &request.password)
        .await?;
    let header = [(AUTHORIZATION, user.token.clone())];

    Ok((header, Json(user.into())))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Extension(_caller): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.account_service.get_user(user_id).await?;
    Ok(Json(user.into()))
}

/// Edit the caller's own profile
pub async fn edit_user(
    State(state): State<AppState>,
    Extension(AuthUser(caller)): Extension<AuthUser>,
    Path(user_id): Path<i64>,
    AppJson(patch): AppJson<Option<EditUserRequest>>,
) -> AppResult<StatusCode> {
    // 404 for a missing target takes precedence over the ownership check
    state.account_service.get_user(user_id).await?;

    if caller.id != user_id {
        return Err(AppError::Authentication("Unauthorized access".to_string()));
    }

    state.profile_service.edit(user_id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Log out with id and token
pub async fn logout(
    State(state): State<AppState>,
    AppJson(request): AppJson<LogoutRequest>,
) -> AppResult<StatusCode> {
    log::info!("Received request to logout user: {}", request.id);

    state
        .session_service
        .logout(request.id, &request.token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthCheckResponse>> {
    state.account_service.health_check().await?;

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    }))
}
