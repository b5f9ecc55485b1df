//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::dashboard::gating::{mail_denial_reason, poke_denial_reason, OutreachHistory};
use crate::errors::AppError;
use crate::events::ShellEvent;
use crate::models::poke::PokeRecord;
use crate::outreach::compose_mail;
use crate::render::render_attachment_base64;
use crate::state::AppState;
use crate::upstream::{OutreachPayload, UpstreamError};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PokeRequest {
    pub target_name: String,
    pub target_email: String,
    pub match_percentage: u8,
    #[serde(default)]
    pub is_vendor: bool,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MailRequest {
    pub target_name: String,
    pub target_email: String,
    pub match_percentage: u8,
    #[serde(default)]
    pub is_vendor: bool,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
    /// Edited subject/body; absent fields fall back to the composed template.
    pub subject: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub attach_resume: bool,
}

#[derive(Debug, Serialize)]
pub struct OutreachResponse {
    pub sent: PokeRecord,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/outreach/poke
///
/// One-click quick notify. Gating is re-checked against the live poke history
/// so the action cannot be replayed from a stale table.
pub async fn handle_poke(
    State(state): State<AppState>,
    Json(request): Json<PokeRequest>,
) -> Result<Json<OutreachResponse>, AppError> {
    if request.target_email.trim().is_empty() {
        return Err(AppError::Validation("target_email cannot be empty".to_string()));
    }

    let sent = state.upstream.sent_pokes().await?;
    let history = OutreachHistory::for_target(&sent, &request.target_email, request.job_id);

    if let Some(reason) = poke_denial_reason(request.match_percentage, request.is_vendor, &history)
    {
        return Err(AppError::Forbidden(format!("Poke unavailable: {reason}")));
    }

    let record = state
        .upstream
        .send_outreach(&OutreachPayload {
            target_name: request.target_name,
            target_email: request.target_email,
            is_email: false,
            subject: None,
            body: None,
            job_id: request.job_id,
            job_title: request.job_title,
            attachment: None,
        })
        .await?;

    Ok(Json(OutreachResponse { sent: record }))
}

/// POST /api/v1/outreach/mail
///
/// Full mail-template send. Sequencing is plain await chaining: render the
/// attachment (if requested), then submit. A render failure downgrades to "no
/// attachment" — it never blocks the send (and there is no retry on either
/// step; the user retries the action).
pub async fn handle_mail(
    State(state): State<AppState>,
    Json(request): Json<MailRequest>,
) -> Result<Json<OutreachResponse>, AppError> {
    if request.target_email.trim().is_empty() {
        return Err(AppError::Validation("target_email cannot be empty".to_string()));
    }

    let sent = state.upstream.sent_pokes().await?;
    let history = OutreachHistory::for_target(&sent, &request.target_email, request.job_id);

    if let Some(reason) = mail_denial_reason(
        request.match_percentage,
        request.is_vendor,
        &history,
        Utc::now(),
    ) {
        return Err(AppError::Forbidden(format!(
            "Mail template unavailable: {reason}"
        )));
    }

    let template = compose_mail(
        &request.target_name,
        request.job_title.as_deref().unwrap_or_default(),
        request.match_percentage,
        &state.config.sender_name,
    );
    let subject = request.subject.unwrap_or(template.subject);
    let body = request.body.unwrap_or(template.body);

    let attachment = if request.attach_resume {
        fetch_and_render_resume(&state).await
    } else {
        None
    };

    let record = state
        .upstream
        .send_outreach(&OutreachPayload {
            target_name: request.target_name,
            target_email: request.target_email,
            is_email: true,
            subject: Some(subject),
            body: Some(body),
            job_id: request.job_id,
            job_title: request.job_title,
            attachment,
        })
        .await?;

    Ok(Json(OutreachResponse { sent: record }))
}

/// GET /api/v1/outreach/sent
pub async fn handle_sent_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokeRecord>>, AppError> {
    Ok(Json(state.upstream.sent_pokes().await?))
}

/// GET /api/v1/outreach/received
pub async fn handle_received_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokeRecord>>, AppError> {
    Ok(Json(state.upstream.received_pokes().await?))
}

/// Fetches the profile and renders it; any failure in either step degrades to
/// no attachment. A missing profile additionally prompts the shell.
async fn fetch_and_render_resume(state: &AppState) -> Option<String> {
    let profile = match state.upstream.candidate_profile().await {
        Ok(profile) => profile,
        Err(UpstreamError::Api { status: 404, .. }) => {
            state.shell.publish(ShellEvent::ProfileRequired {
                reason: "A profile is required to attach a resume".to_string(),
            });
            return None;
        }
        Err(e) => {
            warn!("profile fetch failed, sending without attachment: {e}");
            return None;
        }
    };

    render_attachment_base64(state.renderer.as_ref(), &profile).await
}
