use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod shutdown;

use crate::config::Config;
use crate::error::AppError;

/// Shared application state. Read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,spa_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!(
        environment = %config.environment,
        "Starting {}",
        handlers::SERVICE_NAME
    );
    info!("Trusting X-Amzn-Oidc-* identity headers from the upstream load balancer");

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        config: Arc::new(config),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let wrong_method = handlers::method_not_allowed;

    let routes = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health).fallback(wrong_method))

        // ── Identity passthrough ────────────────────────────────────────────
        .route(
            "/api/user",
            get(handlers::user::get_user_info).fallback(wrong_method),
        )

        // ── Sample data ─────────────────────────────────────────────────────
        .route(
            "/api/data",
            get(handlers::data::list_items).fallback(wrong_method),
        )
        .route(
            "/api/data/:id",
            get(handlers::data::get_item).fallback(wrong_method),
        )

        // ── Echo ────────────────────────────────────────────────────────────
        .route("/api/echo", post(handlers::echo::echo).fallback(wrong_method))

        .fallback(handlers::not_found)
        .with_state(state);

    with_layers(routes)
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(middleware::request_id_layer))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
