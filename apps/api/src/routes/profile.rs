//! Candidate profile endpoints: fetch, update, delete.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, ProfileUpdate};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = state
        .upstream
        .candidate_profile()
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<CandidateProfile>, AppError> {
    if update.expected_pay_per_hour.map(|p| p < 0.0).unwrap_or(false) {
        return Err(AppError::Validation(
            "expected_pay_per_hour cannot be negative".to_string(),
        ));
    }
    if let Some(name) = &update.full_name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("full_name cannot be blank".to_string()));
        }
    }

    let profile = state
        .upstream
        .update_profile(&update)
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profile
pub async fn handle_delete_profile(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .upstream
        .delete_profile()
        .await
        .map_err(|e| AppError::upstream_with_shell(e, &state.shell))?;
    Ok(StatusCode::NO_CONTENT)
}
