//! Posting lifecycle endpoints: list, create, close, reopen. Thin validated
//! proxies over the marketplace backend.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobPostingDraft};
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state
        .upstream
        .vendor_jobs()
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs
///
/// Validates the draft before it leaves this service; the backend re-validates
/// and its message wins if they disagree.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobPostingDraft>,
) -> Result<Json<JobPosting>, AppError> {
    validate_draft(&draft)?;

    let posting = state
        .upstream
        .create_job(&draft)
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(posting))
}

/// POST /api/v1/jobs/:id/close
pub async fn handle_close_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    let posting = state
        .upstream
        .close_job(id)
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(posting))
}

/// POST /api/v1/jobs/:id/reopen
pub async fn handle_reopen_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    let posting = state
        .upstream
        .reopen_job(id)
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(posting))
}

fn validate_draft(draft: &JobPostingDraft) -> Result<(), AppError> {
    let title_ok = draft
        .title
        .as_deref()
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);
    if !title_ok {
        return Err(AppError::Validation("title is required".to_string()));
    }

    if let (Some(job_type), Some(sub)) = (draft.job_type, draft.job_sub_type) {
        if !sub.is_valid_for(job_type) {
            return Err(AppError::Validation(format!(
                "{} is not a valid sub-type for {}",
                sub.label(),
                job_type.label()
            )));
        }
    }

    if draft.pay_per_hour.map(|p| p < 0.0).unwrap_or(false) {
        return Err(AppError::Validation(
            "pay_per_hour cannot be negative".to_string(),
        ));
    }

    Ok(())
}
