//! Résumé attachment rendering behind a pluggable seam.
//!
//! `AppState` holds an `Arc<dyn AttachmentRenderer>`; swapping the rendering
//! backend never touches callers. The default backend is CPU-bound, so its
//! implementation runs the actual layout inside `tokio::task::spawn_blocking`.
//! Callers go through [`render_attachment_base64`], which degrades any failure
//! to "no attachment" rather than blocking the send.

pub mod font_metrics;
pub mod pdf;

use async_trait::async_trait;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

use crate::models::profile::CandidateProfile;

pub use pdf::TextPdfRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("profile has no renderable content")]
    EmptyProfile,

    #[error("render task failed: {0}")]
    Task(String),
}

/// Renders a candidate profile to an attachable document.
///
/// Carried in `AppState` as `Arc<dyn AttachmentRenderer>`.
#[async_trait]
pub trait AttachmentRenderer: Send + Sync {
    async fn render_profile(&self, profile: &CandidateProfile) -> Result<Bytes, RenderError>;
}

/// Renders and returns the base64 payload the backend expects, or `None` when
/// rendering fails — the mail still goes out, just without the attachment.
pub async fn render_attachment_base64(
    renderer: &dyn AttachmentRenderer,
    profile: &CandidateProfile,
) -> Option<String> {
    match renderer.render_profile(profile).await {
        Ok(bytes) => Some(BASE64_STANDARD.encode(&bytes)),
        Err(e) => {
            warn!("resume render failed, sending without attachment: {e}");
            None
        }
    }
}
