//! User Account Service Server
//!
//! Runs the HTTP server with every endpoint enabled.

use axum::http::{header::AUTHORIZATION, HeaderValue};
use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use user_account_service::{
    api::{AppState, RouterBuilder},
    config::{AppConfig, ServerConfig},
    database,
};

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = if server.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = server
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([AUTHORIZATION])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let config = AppConfig::from_env();

    // RUST_LOG wins over LOG_LEVEL when both are set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    log::info!("Starting User Account Service v{}", user_account_service::VERSION);

    config.validate()?;
    log::info!("Configuration loaded and validated");

    let pool = config.database.create_pool().await?;

    log::info!("Running database migrations...");
    database::run_migrations(&pool).await?;
    log::info!("Database migrations completed");

    let app_state = AppState::new(pool);

    let app = RouterBuilder::with_all_routes().build(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server))
            .into_inner(),
    );

    let bind_addr = config.server.bind_addr();
    log::info!("Endpoints:");
    log::info!("  GET  /health - Health check");
    log::info!("  GET  /users - List users (token)");
    log::info!("  POST /users - Register");
    log::info!("  POST /login/auth - Log in");
    log::info!("  GET  /users/{{id}} - Get user (token)");
    log::info!("  PUT  /users/{{id}} - Edit own profile (token)");
    log::info!("  PUT  /users/logout - Log out");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
