/// Marketplace client — the single point of entry for all calls to the
/// job-marketplace backend.
///
/// ARCHITECTURAL RULE: no other module may talk to the backend directly.
/// Every fetch and submit goes through this module so auth-header handling and
/// error surfacing stay in one place.
///
/// Errors come back verbatim: the UI shows backend messages as-is, and there
/// is deliberately no retry and no client-enforced timeout on sends — a failed
/// action is retried by the user, not by this layer.
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::job::{JobPosting, JobPostingDraft};
use crate::models::match_row::{CandidateMatchRecord, JobMatchRecord};
use crate::models::poke::PokeRecord;
use crate::models::profile::{CandidateProfile, ProfileUpdate};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx from the backend. `message` is the backend's own text,
    /// surfaced to the caller unmodified.
    #[error("backend error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct BackendError {
    error: BackendErrorBody,
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: String,
}

/// Payload for the send-outreach endpoint. `is_email = false` is the one-click
/// quick poke; `true` is the composed mail template, optionally carrying a
/// base64-encoded PDF attachment.
#[derive(Debug, Clone, Serialize)]
pub struct OutreachPayload {
    pub target_name: String,
    pub target_email: String,
    pub is_email: bool,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
    /// Base64-encoded PDF, present only on mail sends that attached a resume.
    pub attachment: Option<String>,
}

/// The marketplace backend client. Carries the bearer token when one is
/// configured; without a token requests go out bare (public endpoints only).
#[derive(Clone)]
pub struct MarketClient {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl MarketClient {
    pub fn new(base_url: String, bearer_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, UpstreamError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<BackendError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            // Endpoints with empty bodies deserialize from JSON null.
            return Ok(serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| UpstreamError::Api {
                    status: status.as_u16(),
                    message: "unexpected empty response body".to_string(),
                })?);
        }

        let parsed = response.json::<T>().await?;
        Ok(parsed)
    }

    // ── Matches ─────────────────────────────────────────────────────────────

    /// Jobs the backend matched to the signed-in candidate.
    pub async fn candidate_matches(&self) -> Result<Vec<JobMatchRecord>, UpstreamError> {
        debug!("fetching candidate job matches");
        self.execute(self.request(Method::GET, "/candidate/matches"))
            .await
    }

    /// Candidates matched to the vendor's postings, optionally one posting.
    pub async fn vendor_candidate_matches(
        &self,
        job_id: Option<Uuid>,
    ) -> Result<Vec<CandidateMatchRecord>, UpstreamError> {
        let mut builder = self.request(Method::GET, "/vendor/candidate-matches");
        if let Some(job_id) = job_id {
            builder = builder.query(&[("job_id", job_id.to_string())]);
        }
        self.execute(builder).await
    }

    // ── Job postings ────────────────────────────────────────────────────────

    pub async fn vendor_jobs(&self) -> Result<Vec<JobPosting>, UpstreamError> {
        self.execute(self.request(Method::GET, "/vendor/jobs")).await
    }

    pub async fn create_job(&self, draft: &JobPostingDraft) -> Result<JobPosting, UpstreamError> {
        self.execute(self.request(Method::POST, "/jobs").json(draft))
            .await
    }

    pub async fn close_job(&self, id: Uuid) -> Result<JobPosting, UpstreamError> {
        self.execute(self.request(Method::POST, &format!("/jobs/{id}/close")))
            .await
    }

    pub async fn reopen_job(&self, id: Uuid) -> Result<JobPosting, UpstreamError> {
        self.execute(self.request(Method::POST, &format!("/jobs/{id}/reopen")))
            .await
    }

    // ── Candidate profile ───────────────────────────────────────────────────

    pub async fn candidate_profile(&self) -> Result<CandidateProfile, UpstreamError> {
        self.execute(self.request(Method::GET, "/candidate/profile"))
            .await
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<CandidateProfile, UpstreamError> {
        self.execute(self.request(Method::PUT, "/candidate/profile").json(update))
            .await
    }

    pub async fn delete_profile(&self) -> Result<(), UpstreamError> {
        let builder = self.request(Method::DELETE, "/candidate/profile");
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    // ── Outreach ────────────────────────────────────────────────────────────

    pub async fn send_outreach(
        &self,
        payload: &OutreachPayload,
    ) -> Result<PokeRecord, UpstreamError> {
        debug!(
            is_email = payload.is_email,
            has_attachment = payload.attachment.is_some(),
            "sending outreach"
        );
        self.execute(self.request(Method::POST, "/pokes").json(payload))
            .await
    }

    pub async fn sent_pokes(&self) -> Result<Vec<PokeRecord>, UpstreamError> {
        self.execute(self.request(Method::GET, "/pokes/sent")).await
    }

    pub async fn received_pokes(&self) -> Result<Vec<PokeRecord>, UpstreamError> {
        self.execute(self.request(Method::GET, "/pokes/received"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MarketClient::new("http://backend.example/".to_string(), None);
        assert_eq!(client.base_url, "http://backend.example");
    }

    #[test]
    fn test_backend_error_body_parses_nested_message() {
        let body = r#"{"error": {"message": "title is required"}}"#;
        let parsed: BackendError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "title is required");
    }

    #[test]
    fn test_outreach_payload_serializes_flag_and_attachment() {
        let payload = OutreachPayload {
            target_name: "Dana".to_string(),
            target_email: "dana@acme.example".to_string(),
            is_email: true,
            subject: Some("Hello".to_string()),
            body: Some("Body".to_string()),
            job_id: None,
            job_title: None,
            attachment: Some("JVBERi0=".to_string()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["is_email"], true);
        assert_eq!(json["attachment"], "JVBERi0=");
    }
}
