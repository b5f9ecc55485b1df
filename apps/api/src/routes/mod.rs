pub mod health;
pub mod jobs;
pub mod profile;
pub mod shell;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::extraction::handlers as extraction;
use crate::outreach::handlers as outreach;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Smart-Paste
        .route(
            "/api/v1/postings/parse-text",
            post(extraction::handle_parse_job_text),
        )
        // Dashboards
        .route(
            "/api/v1/dashboard/candidate/rows",
            get(dashboard::handle_candidate_rows),
        )
        .route(
            "/api/v1/dashboard/candidate/export",
            get(dashboard::handle_candidate_export),
        )
        .route(
            "/api/v1/dashboard/vendor/rows",
            get(dashboard::handle_vendor_rows),
        )
        .route(
            "/api/v1/dashboard/vendor/export",
            get(dashboard::handle_vendor_export),
        )
        // Outreach
        .route("/api/v1/outreach/poke", post(outreach::handle_poke))
        .route("/api/v1/outreach/mail", post(outreach::handle_mail))
        .route("/api/v1/outreach/sent", get(outreach::handle_sent_history))
        .route(
            "/api/v1/outreach/received",
            get(outreach::handle_received_history),
        )
        // Postings
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id/close", post(jobs::handle_close_job))
        .route("/api/v1/jobs/:id/reopen", post(jobs::handle_reopen_job))
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile)
                .put(profile::handle_update_profile)
                .delete(profile::handle_delete_profile),
        )
        // Shell bridge
        .route(
            "/api/v1/shell/pricing-modal",
            post(shell::handle_pricing_modal),
        )
        .route(
            "/api/v1/shell/job-type-filter",
            post(shell::handle_job_type_filter),
        )
        .with_state(state)
}
