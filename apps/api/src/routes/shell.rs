//! Shell-bridge endpoints and the module's announcement to the host shell.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::events::{NavItem, ShellBus, ShellEvent};
use crate::models::job::JobType;
use crate::state::AppState;

/// Publishes this module's sidebar entries. Called once at startup — the
/// micro-frontend equivalent of announcing itself to the host on mount.
pub fn announce_module(shell: &ShellBus) {
    shell.publish(ShellEvent::SidebarNav {
        items: vec![
            NavItem {
                label: "Job Matches".to_string(),
                route: "/dashboard/matches".to_string(),
            },
            NavItem {
                label: "Candidate Matches".to_string(),
                route: "/dashboard/candidates".to_string(),
            },
            NavItem {
                label: "My Postings".to_string(),
                route: "/jobs".to_string(),
            },
            NavItem {
                label: "Profile".to_string(),
                route: "/profile".to_string(),
            },
        ],
    });
}

#[derive(Debug, Deserialize)]
pub struct PricingModalRequest {
    pub open: bool,
}

/// POST /api/v1/shell/pricing-modal
pub async fn handle_pricing_modal(
    State(state): State<AppState>,
    Json(request): Json<PricingModalRequest>,
) -> Result<StatusCode, AppError> {
    state
        .shell
        .publish(ShellEvent::PricingModal { open: request.open });
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct JobTypeFilterRequest {
    pub job_type: Option<JobType>,
}

/// POST /api/v1/shell/job-type-filter
///
/// Pushes a job-type filter into the shared job browser.
pub async fn handle_job_type_filter(
    State(state): State<AppState>,
    Json(request): Json<JobTypeFilterRequest>,
) -> Result<StatusCode, AppError> {
    state.shell.publish(ShellEvent::JobTypeFilter {
        job_type: request.job_type,
    });
    Ok(StatusCode::NO_CONTENT)
}
