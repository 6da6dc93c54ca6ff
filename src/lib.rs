use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

pub mod ai;
pub mod config;
pub mod error;
pub mod handlers;
pub mod limit;
pub mod models;

use crate::ai::AiClient;
use crate::config::Config;
use crate::limit::RateLimiter;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ai: AiClient,
    pub limiter: Arc<RwLock<RateLimiter>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ai = AiClient::from_config(&config);
        let limiter = RateLimiter::new(
            config.rate_limit_max,
            Duration::from_secs(config.rate_limit_window_secs),
        );
        Self {
            config: Arc::new(config),
            ai,
            limiter: Arc::new(RwLock::new(limiter)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Everything under /api/ shares the rate limiter; /health and the static
    // frontend stay outside it.
    let api = Router::new()
        // ── Stoichiometry (stub pending the real engine) ────────────────────
        .route("/api/stoich", post(handlers::stoich::stoich_example))
        // ── AI tutor ────────────────────────────────────────────────────────
        .route("/api/ask", post(handlers::solver::ask))
        .route("/api/solve/equation", post(handlers::solver::solve_equation))
        .route("/api/solve/vsepr", post(handlers::solver::solve_vsepr))
        .route("/api/solve/advanced", post(handlers::solver::solve_advanced))
        .route("/api/draw/element", post(handlers::drawings::draw_element))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            limit::enforce,
        ));

    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))
        .merge(api)
        // ── Frontend ────────────────────────────────────────────────────────
        .fallback_service(ServeDir::new(&state.config.static_dir))
        // ── Middleware ──────────────────────────────────────────────────────
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes))
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive in dev; restricted to the configured allowlist otherwise.
/// Requests without an Origin header are unaffected (CORS is browser-enforced).
fn cors_layer(config: &Config) -> CorsLayer {
    match &config.allowed_origins {
        None => CorsLayer::permissive(),
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "ignoring malformed entry in ALLOWED_ORIGINS");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(parsed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
