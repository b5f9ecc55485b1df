//! Matchboard API — job-marketplace dashboards, Smart-Paste posting intake,
//! and gated outreach, served to the host shell over REST.

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod extraction;
pub mod models;
pub mod outreach;
pub mod render;
pub mod routes;
pub mod state;
pub mod upstream;

use std::sync::Arc;

pub use routes::build_router;

/// State wired for router tests: an upstream client pointed at a dead address
/// (pure endpoints never touch it) and default components.
pub fn test_state() -> state::AppState {
    state::AppState {
        upstream: upstream::MarketClient::new("http://127.0.0.1:9".to_string(), None),
        config: config::Config {
            market_api_url: "http://127.0.0.1:9".to_string(),
            market_api_token: None,
            sender_name: "Matchboard".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
        renderer: Arc::new(render::TextPdfRenderer),
        shell: events::ShellBus::default(),
    }
}
