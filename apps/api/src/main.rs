use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matchboard_api::config::Config;
use matchboard_api::events::ShellBus;
use matchboard_api::render::TextPdfRenderer;
use matchboard_api::routes::{build_router, shell};
use matchboard_api::state::AppState;
use matchboard_api::upstream::MarketClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("matchboard_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    // Marketplace backend client
    let upstream = MarketClient::new(
        config.market_api_url.clone(),
        config.market_api_token.clone(),
    );
    info!("Marketplace client initialized ({})", config.market_api_url);

    // Resume renderer behind the AttachmentRenderer seam
    let renderer = Arc::new(TextPdfRenderer);

    // Shell bus; announce this module's navigation to the host
    let shell_bus = ShellBus::default();
    shell::announce_module(&shell_bus);

    // Build app state
    let state = AppState {
        upstream,
        config: config.clone(),
        renderer,
        shell: shell_bus,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the host shell fronts this service

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
