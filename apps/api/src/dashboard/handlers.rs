//! Axum route handlers for the dashboard tables and their CSV exports.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dashboard::csv_export::{rows_to_csv, EXPORT_FILENAME};
use crate::dashboard::filters::RowFilter;
use crate::dashboard::gating::{evaluate, ActionGate, OutreachHistory};
use crate::dashboard::pagination::{is_allowed_page_size, DEFAULT_PAGE_SIZE, PAGE_SIZES};
use crate::dashboard::sort::{SortColumn, SortDirection, SortState};
use crate::dashboard::{build_page, filter_and_sort};
use crate::errors::AppError;
use crate::events::ShellEvent;
use crate::models::job::{JobSubType, JobType, WorkMode};
use crate::models::match_row::{MatchRow, SourceRecord};
use crate::models::poke::PokeRecord;
use crate::state::AppState;
use crate::upstream::UpstreamError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct TableQueryParams {
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    /// Free-text filter across name/role/location/email.
    pub q: Option<String>,
    pub sort_by: Option<SortColumn>,
    pub sort_dir: Option<SortDirection>,
    #[serde(default)]
    pub page: usize,
    pub page_size: Option<usize>,
    /// Vendor dashboard only: restrict matches to one posting.
    pub job_id: Option<Uuid>,
}

impl TableQueryParams {
    fn filter(&self) -> RowFilter {
        RowFilter {
            job_type: self.job_type,
            job_sub_type: self.job_sub_type,
            work_mode: self.work_mode,
            search: self.q.clone(),
        }
    }

    fn sort(&self) -> Option<SortState> {
        self.sort_by.map(|column| SortState {
            column,
            direction: self.sort_dir.unwrap_or(SortDirection::Ascending),
        })
    }

    fn page_size(&self) -> Result<usize, AppError> {
        match self.page_size {
            None => Ok(DEFAULT_PAGE_SIZE),
            Some(size) if is_allowed_page_size(size) => Ok(size),
            Some(size) => Err(AppError::Validation(format!(
                "page_size {size} is not one of {PAGE_SIZES:?}"
            ))),
        }
    }
}

/// One table row plus its action gate.
#[derive(Debug, Serialize)]
pub struct RowView {
    #[serde(flatten)]
    pub row: MatchRow,
    pub can_poke: bool,
    pub can_mail: bool,
}

#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/dashboard/candidate/rows
///
/// The candidate's job-match table: membership-gated, filtered, sorted, and
/// paginated, with per-row outreach gates evaluated against live poke history.
pub async fn handle_candidate_rows(
    State(state): State<AppState>,
    Query(params): Query<TableQueryParams>,
) -> Result<Json<TableResponse>, AppError> {
    let page_size = params.page_size()?;
    let rows = candidate_row_set(&state, &params).await?;
    let pokes = state.upstream.sent_pokes().await?;

    state.shell.publish(ShellEvent::Breadcrumb {
        segments: vec!["Dashboard".to_string(), "Job Matches".to_string()],
    });

    Ok(Json(assemble(rows, params.page, page_size, false, &pokes)))
}

/// GET /api/v1/dashboard/candidate/export
///
/// CSV of the full filtered+sorted candidate table — never just the visible
/// page.
pub async fn handle_candidate_export(
    State(state): State<AppState>,
    Query(params): Query<TableQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let rows = candidate_row_set(&state, &params).await?;
    csv_response(&rows)
}

/// GET /api/v1/dashboard/vendor/rows
///
/// The vendor's candidate-match table, optionally scoped to one posting.
/// Vendors see no membership gate and no percentage thresholds.
pub async fn handle_vendor_rows(
    State(state): State<AppState>,
    Query(params): Query<TableQueryParams>,
) -> Result<Json<TableResponse>, AppError> {
    let page_size = params.page_size()?;
    let rows = vendor_row_set(&state, &params).await?;
    let pokes = state.upstream.sent_pokes().await?;

    state.shell.publish(ShellEvent::Breadcrumb {
        segments: vec!["Dashboard".to_string(), "Candidate Matches".to_string()],
    });

    Ok(Json(assemble(rows, params.page, page_size, true, &pokes)))
}

/// GET /api/v1/dashboard/vendor/export
pub async fn handle_vendor_export(
    State(state): State<AppState>,
    Query(params): Query<TableQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let rows = vendor_row_set(&state, &params).await?;
    csv_response(&rows)
}

// ────────────────────────────────────────────────────────────────────────────
// Row-set assembly
// ────────────────────────────────────────────────────────────────────────────

async fn candidate_row_set(
    state: &AppState,
    params: &TableQueryParams,
) -> Result<Vec<MatchRow>, AppError> {
    // Membership comes off the profile; a candidate without one browses
    // unrestricted (public tier).
    let membership = match state.upstream.candidate_profile().await {
        Ok(profile) => profile.membership,
        Err(UpstreamError::Api { status: 404, .. }) => None,
        Err(e) => return Err(e.into()),
    };

    let records = state.upstream.candidate_matches().await?;
    let rows: Vec<MatchRow> = records.into_iter().map(MatchRow::from_job_match).collect();

    Ok(filter_and_sort(
        rows,
        membership.as_ref(),
        &params.filter(),
        params.sort(),
    ))
}

async fn vendor_row_set(
    state: &AppState,
    params: &TableQueryParams,
) -> Result<Vec<MatchRow>, AppError> {
    let records = state
        .upstream
        .vendor_candidate_matches(params.job_id)
        .await?;
    let rows: Vec<MatchRow> = records
        .into_iter()
        .map(MatchRow::from_candidate_match)
        .collect();

    Ok(filter_and_sort(rows, None, &params.filter(), params.sort()))
}

fn assemble(
    rows: Vec<MatchRow>,
    page: usize,
    page_size: usize,
    is_vendor: bool,
    pokes: &[PokeRecord],
) -> TableResponse {
    let now = Utc::now();
    let table = build_page(rows, page, page_size);
    let rows = table
        .rows
        .into_iter()
        .map(|row| to_view(row, is_vendor, pokes, now))
        .collect();

    TableResponse {
        rows,
        page: table.page,
        page_count: table.page_count,
        total_rows: table.total_rows,
    }
}

fn to_view(row: MatchRow, is_vendor: bool, pokes: &[PokeRecord], now: DateTime<Utc>) -> RowView {
    let history = match &row.poke_target_email {
        Some(email) => OutreachHistory::for_target(pokes, email, row_job_id(&row)),
        // No target address: nothing was ever sent, nothing ever can be.
        None => OutreachHistory::default(),
    };
    let gate = if row.poke_target_email.is_some() {
        evaluate(row.match_percentage, is_vendor, &history, now)
    } else {
        ActionGate {
            can_poke: false,
            can_mail: false,
        }
    };
    RowView {
        row,
        can_poke: gate.can_poke,
        can_mail: gate.can_mail,
    }
}

fn row_job_id(row: &MatchRow) -> Option<Uuid> {
    match &row.source {
        SourceRecord::Job(job) => Some(job.id),
        SourceRecord::Candidate(candidate) => candidate.job_id,
    }
}

fn csv_response(rows: &[MatchRow]) -> Result<impl IntoResponse, AppError> {
    let csv = rows_to_csv(rows)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        csv,
    ))
}
