//! Axum route handlers for the Smart-Paste API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{parse_job_text, ParsedJobPosting};
use crate::models::job::JobPostingDraft;

#[derive(Debug, Deserialize)]
pub struct ParseJobTextRequest {
    pub text: String,
    /// Current form state, if the caller wants the merge applied server-side.
    #[serde(default)]
    pub draft: Option<JobPostingDraft>,
}

#[derive(Debug, Serialize)]
pub struct ParseJobTextResponse {
    pub parsed: ParsedJobPosting,
    /// The caller's draft with parsed fields merged in additively.
    pub draft: JobPostingDraft,
}

/// POST /api/v1/postings/parse-text
///
/// Parsing cannot fail: an empty or unrecognizable paste returns a record with
/// just the trimmed description, and the merge leaves the draft untouched
/// everywhere the parser found nothing.
pub async fn handle_parse_job_text(
    Json(request): Json<ParseJobTextRequest>,
) -> Result<Json<ParseJobTextResponse>, AppError> {
    let parsed = parse_job_text(&request.text);

    let mut draft = request.draft.unwrap_or_default();
    parsed.apply_to(&mut draft);

    Ok(Json(ParseJobTextResponse { parsed, draft }))
}
