//! Row filtering for the dashboard tables.
//!
//! Filters apply in a fixed order, all conjunctive: membership visibility gate
//! → job type → job sub-type → work mode → free text. The free-text filter is
//! a case-insensitive substring match OR'd across name/role/location/email.

use crate::models::job::{JobSubType, JobType, WorkMode};
use crate::models::match_row::MatchRow;
use crate::models::profile::VisibilityPackage;

/// The user-selected filter set. `None` fields are pass-through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub job_type: Option<JobType>,
    pub job_sub_type: Option<JobSubType>,
    pub work_mode: Option<WorkMode>,
    pub search: Option<String>,
}

/// Applies the membership gate and all user filters, preserving input order.
/// A missing or empty membership package means unrestricted visibility.
pub fn apply_filters(
    rows: Vec<MatchRow>,
    membership: Option<&VisibilityPackage>,
    filter: &RowFilter,
) -> Vec<MatchRow> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    rows.into_iter()
        .filter(|row| {
            membership
                .map(|pkg| pkg.permits(row.job_type, row.job_sub_type))
                .unwrap_or(true)
        })
        .filter(|row| filter.job_type.map_or(true, |t| row.job_type == Some(t)))
        .filter(|row| {
            filter
                .job_sub_type
                .map_or(true, |s| row.job_sub_type == Some(s))
        })
        .filter(|row| filter.work_mode.map_or(true, |m| row.work_mode == Some(m)))
        .filter(|row| match &needle {
            None => true,
            Some(needle) => matches_text(row, needle),
        })
        .collect()
}

fn matches_text(row: &MatchRow, needle: &str) -> bool {
    [&row.name, &row.role, &row.location, &row.email]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::match_row::{JobMatchRecord, MatchRow};
    use crate::models::profile::TypeCombination;
    use uuid::Uuid;

    fn row(name: &str, job_type: Option<JobType>, sub: Option<JobSubType>) -> MatchRow {
        MatchRow::from_job_match(JobMatchRecord {
            id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: Some("Acme".to_string()),
            contact_name: Some(name.to_string()),
            contact_email: Some(format!("{}@acme.example", name.to_lowercase())),
            contact_phone: None,
            location: Some("Austin, TX".to_string()),
            work_mode: Some(WorkMode::Remote),
            job_type,
            job_sub_type: sub,
            pay_per_hour: None,
            experience_required_years: None,
            match_percentage: 50,
        })
    }

    #[test]
    fn test_no_filters_passes_everything_through() {
        let rows = vec![row("Ada", Some(JobType::Contract), Some(JobSubType::C2c))];
        let out = apply_filters(rows.clone(), None, &RowFilter::default());
        assert_eq!(out, rows);
    }

    #[test]
    fn test_membership_gate_drops_out_of_package_rows() {
        let rows = vec![
            row("Ada", Some(JobType::Contract), Some(JobSubType::C2c)),
            row("Ben", Some(JobType::FullTime), Some(JobSubType::Salary)),
            row("Cal", None, None),
        ];
        let package = VisibilityPackage {
            allowed: vec![TypeCombination {
                job_type: JobType::Contract,
                job_sub_type: None,
            }],
        };
        let out = apply_filters(rows, Some(&package), &RowFilter::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ada");
    }

    #[test]
    fn test_exact_type_and_sub_type_filters() {
        let rows = vec![
            row("Ada", Some(JobType::Contract), Some(JobSubType::C2c)),
            row("Ben", Some(JobType::Contract), Some(JobSubType::W2)),
        ];
        let filter = RowFilter {
            job_type: Some(JobType::Contract),
            job_sub_type: Some(JobSubType::W2),
            ..RowFilter::default()
        };
        let out = apply_filters(rows, None, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ben");
    }

    #[test]
    fn test_free_text_matches_any_of_the_four_fields() {
        let rows = vec![
            row("Ada", Some(JobType::Contract), None),
            row("Ben", Some(JobType::Contract), None),
        ];
        // Matches Ada's email, nobody's name.
        let filter = RowFilter {
            search: Some("ADA@acme".to_string()),
            ..RowFilter::default()
        };
        let out = apply_filters(rows, None, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ada");
    }

    #[test]
    fn test_free_text_ands_with_typed_filters() {
        let rows = vec![
            row("Ada", Some(JobType::Contract), None),
            row("Ada", Some(JobType::FullTime), None),
        ];
        let filter = RowFilter {
            job_type: Some(JobType::FullTime),
            search: Some("ada".to_string()),
            ..RowFilter::default()
        };
        let out = apply_filters(rows, None, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].job_type, Some(JobType::FullTime));
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let rows = vec![row("Ada", None, None)];
        let filter = RowFilter {
            search: Some("   ".to_string()),
            ..RowFilter::default()
        };
        let out = apply_filters(rows, None, &filter);
        assert_eq!(out.len(), 1);
    }
}
