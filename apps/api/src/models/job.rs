//! Job posting types shared across the extraction engine, dashboards, and the
//! upstream client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        }
    }
}

/// Engagement sub-type. Valid combinations depend on the parent [`JobType`] —
/// see [`JobSubType::is_valid_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSubType {
    C2c,
    C2h,
    W2,
    #[serde(rename = "1099")]
    Ten99,
    DirectHire,
    Salary,
}

impl JobSubType {
    /// Contract postings carry corp-to-corp/corp-to-hire/W2/1099 terms;
    /// full-time postings carry direct-hire/salary/W2 terms. Part-time
    /// postings carry no sub-type.
    pub fn is_valid_for(&self, job_type: JobType) -> bool {
        match job_type {
            JobType::Contract => matches!(
                self,
                JobSubType::C2c | JobSubType::C2h | JobSubType::W2 | JobSubType::Ten99
            ),
            JobType::FullTime => matches!(
                self,
                JobSubType::DirectHire | JobSubType::Salary | JobSubType::W2
            ),
            JobType::PartTime => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobSubType::C2c => "C2C",
            JobSubType::C2h => "C2H",
            JobSubType::W2 => "W2",
            JobSubType::Ten99 => "1099",
            JobSubType::DirectHire => "Direct hire",
            JobSubType::Salary => "Salary",
        }
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

impl WorkMode {
    pub fn label(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Onsite => "Onsite",
            WorkMode::Hybrid => "Hybrid",
        }
    }
}

/// Lifecycle status of a vendor's posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingStatus {
    Open,
    Closed,
}

/// A job posting as stored by the marketplace backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    pub pay_per_hour: Option<f64>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub experience_required_years: Option<u32>,
    pub skills: Vec<String>,
    pub description: Option<String>,
    pub status: PostingStatus,
    pub created_at: DateTime<Utc>,
}

/// Editable form state for a posting being drafted. Every field is optional so
/// Smart-Paste results can be merged in additively — see
/// [`crate::extraction::ParsedJobPosting::apply_to`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDraft {
    pub title: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    pub pay_per_hour: Option<f64>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub experience_required_years: Option<u32>,
    pub skills: Vec<String>,
    pub description: Option<String>,
}
