//! The normalized view-model both dashboards render.
//!
//! Backend match records come in two shapes — jobs matched to a candidate, and
//! candidates matched to a vendor's job. Both are resolved into [`MatchRow`]
//! once, at the API boundary, and the original record rides along as a tagged
//! [`SourceRecord`] for the detail view. Rows are rebuilt on every fetch and
//! never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::{JobSubType, JobType, WorkMode};

/// A job the backend matched to the signed-in candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatchRecord {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<String>,
    pub work_mode: Option<WorkMode>,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub pay_per_hour: Option<f64>,
    pub experience_required_years: Option<u32>,
    /// Backend-computed compatibility score, 0–100. Opaque to this service.
    pub match_percentage: u8,
}

/// A candidate the backend matched to one of the vendor's postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatchRecord {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub work_mode: Option<WorkMode>,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub expected_pay_per_hour: Option<f64>,
    pub experience_years: Option<u32>,
    pub match_percentage: u8,
    pub job_id: Option<Uuid>,
    pub job_title: Option<String>,
}

/// The original backend record behind a row, kept for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceRecord {
    Job(JobMatchRecord),
    Candidate(CandidateMatchRecord),
}

/// One dashboard table row. Display fields are pre-formatted strings so the
/// table and the CSV export render identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    pub pay_per_hour: String,
    pub experience: String,
    pub location: String,
    pub match_percentage: u8,
    pub poke_target_email: Option<String>,
    pub poke_target_name: String,
    pub poke_subject_context: String,
    pub source: SourceRecord,
}

impl MatchRow {
    /// Candidate dashboard: one row per matched job. Outreach targets the
    /// posting's contact; the subject context is the job title.
    pub fn from_job_match(record: JobMatchRecord) -> Self {
        MatchRow {
            id: record.id,
            name: record.contact_name.clone().unwrap_or_default(),
            company: record.company.clone().unwrap_or_default(),
            email: record.contact_email.clone().unwrap_or_default(),
            phone: record.contact_phone.clone().unwrap_or_default(),
            role: record.title.clone(),
            job_type: record.job_type,
            job_sub_type: record.job_sub_type,
            work_mode: record.work_mode,
            pay_per_hour: format_pay(record.pay_per_hour),
            experience: format_experience(record.experience_required_years),
            location: record.location.clone().unwrap_or_default(),
            match_percentage: record.match_percentage.min(100),
            poke_target_email: record.contact_email.clone(),
            poke_target_name: record.contact_name.clone().unwrap_or_default(),
            poke_subject_context: record.title.clone(),
            source: SourceRecord::Job(record),
        }
    }

    /// Vendor dashboard: one row per matched candidate. Outreach targets the
    /// candidate; the subject context is the posting their score came from.
    pub fn from_candidate_match(record: CandidateMatchRecord) -> Self {
        MatchRow {
            id: record.id,
            name: record.name.clone(),
            company: String::new(),
            email: record.email.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            role: record.role.clone().unwrap_or_default(),
            job_type: record.job_type,
            job_sub_type: record.job_sub_type,
            work_mode: record.work_mode,
            pay_per_hour: format_pay(record.expected_pay_per_hour),
            experience: format_experience(record.experience_years),
            location: record.location.clone().unwrap_or_default(),
            match_percentage: record.match_percentage.min(100),
            poke_target_email: record.email.clone(),
            poke_target_name: record.name.clone(),
            poke_subject_context: record
                .job_title
                .clone()
                .or_else(|| record.role.clone())
                .unwrap_or_default(),
            source: SourceRecord::Candidate(record),
        }
    }
}

fn format_pay(pay: Option<f64>) -> String {
    match pay {
        Some(rate) => format!("${rate:.2}/hr"),
        None => "-".to_string(),
    }
}

fn format_experience(years: Option<u32>) -> String {
    match years {
        Some(1) => "1 yr".to_string(),
        Some(n) => format!("{n} yrs"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn job_record(pct: u8) -> JobMatchRecord {
        JobMatchRecord {
            id: Uuid::new_v4(),
            title: "Senior Rust Engineer".to_string(),
            company: Some("Acme Corp".to_string()),
            contact_name: Some("Dana Reyes".to_string()),
            contact_email: Some("dana@acme.example".to_string()),
            contact_phone: None,
            location: Some("Austin, TX".to_string()),
            work_mode: Some(WorkMode::Hybrid),
            job_type: Some(JobType::Contract),
            job_sub_type: Some(JobSubType::C2c),
            pay_per_hour: Some(85.0),
            experience_required_years: Some(5),
            match_percentage: pct,
        }
    }

    #[test]
    fn test_job_match_row_targets_posting_contact() {
        let row = MatchRow::from_job_match(job_record(80));
        assert_eq!(row.poke_target_email.as_deref(), Some("dana@acme.example"));
        assert_eq!(row.poke_target_name, "Dana Reyes");
        assert_eq!(row.poke_subject_context, "Senior Rust Engineer");
        assert!(matches!(row.source, SourceRecord::Job(_)));
    }

    #[test]
    fn test_pay_and_experience_are_formatted() {
        let row = MatchRow::from_job_match(job_record(80));
        assert_eq!(row.pay_per_hour, "$85.00/hr");
        assert_eq!(row.experience, "5 yrs");
    }

    #[test]
    fn test_missing_pay_formats_as_dash() {
        let mut record = job_record(50);
        record.pay_per_hour = None;
        record.experience_required_years = Some(1);
        let row = MatchRow::from_job_match(record);
        assert_eq!(row.pay_per_hour, "-");
        assert_eq!(row.experience, "1 yr");
    }

    #[test]
    fn test_match_percentage_is_clamped_to_100() {
        let row = MatchRow::from_job_match(job_record(130));
        assert_eq!(row.match_percentage, 100);
    }

    #[test]
    fn test_candidate_match_row_subject_falls_back_to_role() {
        let record = CandidateMatchRecord {
            id: Uuid::new_v4(),
            name: "Sam Field".to_string(),
            email: Some("sam@example.com".to_string()),
            phone: None,
            role: Some("Data Engineer".to_string()),
            location: None,
            work_mode: None,
            job_type: None,
            job_sub_type: None,
            expected_pay_per_hour: None,
            experience_years: None,
            match_percentage: 42,
            job_id: None,
            job_title: None,
        };
        let row = MatchRow::from_candidate_match(record);
        assert_eq!(row.poke_subject_context, "Data Engineer");
        assert_eq!(row.poke_target_name, "Sam Field");
    }
}
