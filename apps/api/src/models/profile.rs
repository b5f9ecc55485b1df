//! Candidate profile types, including the visibility package that gates which
//! postings a membership tier may see.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job::{JobSubType, JobType, WorkMode};

/// One job-type/sub-type combination a membership tier is entitled to see.
/// A `None` sub-type admits every sub-type under the job type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCombination {
    pub job_type: JobType,
    pub job_sub_type: Option<JobSubType>,
}

/// Purchased entitlement restricting visible postings. An empty `allowed` list
/// means unrestricted — same as carrying no package at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityPackage {
    pub allowed: Vec<TypeCombination>,
}

impl VisibilityPackage {
    pub fn permits(&self, job_type: Option<JobType>, job_sub_type: Option<JobSubType>) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        let Some(job_type) = job_type else {
            // Untyped records fall outside every restricted package.
            return false;
        };
        self.allowed.iter().any(|combo| {
            combo.job_type == job_type
                && (combo.job_sub_type.is_none() || combo.job_sub_type == job_sub_type)
        })
    }
}

/// The candidate profile as held by the marketplace backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub preferred_work_mode: Option<WorkMode>,
    pub desired_job_types: Vec<JobType>,
    pub expected_pay_per_hour: Option<f64>,
    pub experience_years: Option<u32>,
    pub skills: Vec<String>,
    pub summary: Option<String>,
    pub membership: Option<VisibilityPackage>,
}

/// Partial update payload for `PUT /profile`. Absent fields are left untouched
/// by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub preferred_work_mode: Option<WorkMode>,
    pub desired_job_types: Option<Vec<JobType>>,
    pub expected_pay_per_hour: Option<f64>,
    pub experience_years: Option<u32>,
    pub skills: Option<Vec<String>>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_package_is_unrestricted() {
        let package = VisibilityPackage::default();
        assert!(package.permits(Some(JobType::Contract), Some(JobSubType::C2c)));
        assert!(package.permits(None, None));
    }

    #[test]
    fn test_package_with_wildcard_sub_type_admits_all_subs() {
        let package = VisibilityPackage {
            allowed: vec![TypeCombination {
                job_type: JobType::Contract,
                job_sub_type: None,
            }],
        };
        assert!(package.permits(Some(JobType::Contract), Some(JobSubType::C2c)));
        assert!(package.permits(Some(JobType::Contract), None));
        assert!(!package.permits(Some(JobType::FullTime), None));
    }

    #[test]
    fn test_package_with_exact_combination() {
        let package = VisibilityPackage {
            allowed: vec![TypeCombination {
                job_type: JobType::Contract,
                job_sub_type: Some(JobSubType::W2),
            }],
        };
        assert!(package.permits(Some(JobType::Contract), Some(JobSubType::W2)));
        assert!(!package.permits(Some(JobType::Contract), Some(JobSubType::C2c)));
    }

    #[test]
    fn test_untyped_record_dropped_under_restriction() {
        let package = VisibilityPackage {
            allowed: vec![TypeCombination {
                job_type: JobType::FullTime,
                job_sub_type: None,
            }],
        };
        assert!(!package.permits(None, None));
    }
}
