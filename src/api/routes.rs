//! API Route Definitions
//!
//! This module defines all HTTP routes and their corresponding handlers using a
//! builder pattern. The RouterBuilder allows selective enabling/disabling of
//! endpoints, and attaches the token middleware to the routes that need a
//! caller identity.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use super::handlers::*;
use super::middleware::auth_middleware;

/// Builder for creating API routes with configurable endpoints
#[derive(Default)]
pub struct RouterBuilder {
    /// GET /health
    health_check: bool,
    /// GET /users (token required)
    list_users: bool,
    /// POST /users
    create_user: bool,
    /// POST /login/auth
    login: bool,
    /// GET /users/{id} (token required)
    get_user: bool,
    /// PUT /users/{id} (token required, caller must own the profile)
    edit_user: bool,
    /// PUT /users/logout
    logout: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with all routes enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            create_user: true,
            login: true,
            get_user: true,
            edit_user: true,
            logout: true,
        }
    }

    /// Creates a router builder with read-only routes
    ///
    /// Health check, listing and lookup. Nothing that writes.
    pub fn with_readonly_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            get_user: true,
            ..Self::default()
        }
    }

    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    pub fn list_users(mut self, enabled: bool) -> Self {
        self.list_users = enabled;
        self
    }

    pub fn create_user(mut self, enabled: bool) -> Self {
        self.create_user = enabled;
        self
    }

    pub fn login(mut self, enabled: bool) -> Self {
        self.login = enabled;
        self
    }

    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    pub fn edit_user(mut self, enabled: bool) -> Self {
        self.edit_user = enabled;
        self
    }

    pub fn logout(mut self, enabled: bool) -> Self {
        self.logout = enabled;
        self
    }

    /// Builds the Axum router with the configured routes and state
    ///
    /// `/users/logout` is a static segment, so it wins over `/users/{id}`
    /// for PUT requests.
    pub fn build(self, state: AppState) -> Router {
        let auth = || from_fn_with_state(state.clone(), auth_middleware);
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", get(health_check));
        }

        if self.list_users {
            router = router.route("/users", get(list_users).route_layer(auth()));
        }

        if self.create_user {
            router = router.route("/users", post(create_user));
        }

        if self.login {
            router = router.route("/login/auth", post(login));
        }

        if self.logout {
            router = router.route("/users/logout", put(logout));
        }

        if self.get_user {
            router = router.route("/users/{id}", get(get_user).route_layer(auth()));
        }

        if self.edit_user {
            router = router.route("/users/{id}", put(edit_user).route_layer(auth()));
        }

        router.with_state(state)
    }
}

/// Creates all API routes
pub fn create_routes(state: AppState) -> Router {
    RouterBuilder::with_all_routes().build(state)
}
