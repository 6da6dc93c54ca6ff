use std::net::SocketAddr;

use tracing::info;

use chem_service::config::Config;
use chem_service::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chem_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Chem Service  — Rust + Axum         ║");
    info!("║  health · stoich · AI chemistry tutor║");
    info!("╚══════════════════════════════════════╝");

    if config.openai_api_key.is_some() {
        info!(model = %config.openai_model, "AI tutor endpoints enabled");
    } else {
        info!("OPENAI_API_KEY not set — AI endpoints answer 503; the rest of the API still works");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);
    let app = build_router(state);

    info!("Listening on http://{}", addr);
    info!(
        "Quick-start: GET http://{}/health  →  then POST http://{}/api/stoich {{\"value\": 3.0}}",
        addr, addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    // ConnectInfo gives the rate limiter a per-client key.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
