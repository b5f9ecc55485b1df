use std::sync::Arc;

use crate::config::Config;
use crate::events::ShellBus;
use crate::render::AttachmentRenderer;
use crate::upstream::MarketClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one client for the marketplace backend.
    pub upstream: MarketClient,
    pub config: Config,
    /// Pluggable resume renderer. Default: TextPdfRenderer.
    pub renderer: Arc<dyn AttachmentRenderer>,
    /// Typed event bus toward the hosting shell.
    pub shell: ShellBus,
}
