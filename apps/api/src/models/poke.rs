//! Outreach records fetched read-only from the marketplace backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sent notification. `is_email` distinguishes the one-click quick poke
/// (`false`) from a fully composed mail-template send (`true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeRecord {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub target_name: String,
    pub target_email: String,
    pub is_email: bool,
    pub created_at: DateTime<Utc>,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
}
