//! Single-column sorting for the dashboard tables.
//!
//! Re-selecting the active column flips direction; selecting a new column
//! resets to ascending. String columns compare case-insensitively;
//! `match_percentage` compares numerically. `slice::sort_by` is stable, so
//! equal keys keep their fetch order — that stability is part of the contract
//! here, not an accident of the runtime.

use serde::{Deserialize, Serialize};

use crate::models::match_row::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Company,
    Role,
    #[serde(rename = "type")]
    JobType,
    MatchPercentage,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Column-header click semantics: same column toggles, new column starts
    /// ascending.
    pub fn toggle(current: Option<SortState>, column: SortColumn) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                direction: state.direction.flip(),
            },
            _ => SortState {
                column,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Sorts rows in place according to the sort state.
pub fn sort_rows(rows: &mut [MatchRow], state: SortState) {
    rows.sort_by(|a, b| {
        let ordering = match state.column {
            SortColumn::MatchPercentage => a.match_percentage.cmp(&b.match_percentage),
            column => text_key(a, column)
                .to_lowercase()
                .cmp(&text_key(b, column).to_lowercase()),
        };
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn text_key(row: &MatchRow, column: SortColumn) -> String {
    match column {
        SortColumn::Name => row.name.clone(),
        SortColumn::Company => row.company.clone(),
        SortColumn::Role => row.role.clone(),
        SortColumn::Location => row.location.clone(),
        SortColumn::JobType => row
            .job_type
            .map(|t| t.label().to_string())
            .unwrap_or_default(),
        SortColumn::MatchPercentage => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::match_row::JobMatchRecord;
    use uuid::Uuid;

    fn row(name: &str, pct: u8) -> MatchRow {
        MatchRow::from_job_match(JobMatchRecord {
            id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: None,
            contact_name: Some(name.to_string()),
            contact_email: None,
            contact_phone: None,
            location: None,
            work_mode: None,
            job_type: None,
            job_sub_type: None,
            pay_per_hour: None,
            experience_required_years: None,
            match_percentage: pct,
        })
    }

    fn names(rows: &[MatchRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let first = SortState::toggle(None, SortColumn::Name);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortState::toggle(Some(first), SortColumn::Name);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggle(Some(second), SortColumn::Name);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_column_resets_to_ascending() {
        let name_desc = SortState {
            column: SortColumn::Name,
            direction: SortDirection::Descending,
        };
        let next = SortState::toggle(Some(name_desc), SortColumn::Location);
        assert_eq!(next.column, SortColumn::Location);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let mut rows = vec![row("delta", 10), row("Alpha", 20), row("charlie", 30)];
        sort_rows(
            &mut rows,
            SortState {
                column: SortColumn::Name,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(names(&rows), vec!["Alpha", "charlie", "delta"]);
    }

    #[test]
    fn test_match_percentage_sorts_numerically() {
        let mut rows = vec![row("a", 9), row("b", 100), row("c", 25)];
        sort_rows(
            &mut rows,
            SortState {
                column: SortColumn::MatchPercentage,
                direction: SortDirection::Descending,
            },
        );
        let pcts: Vec<u8> = rows.iter().map(|r| r.match_percentage).collect();
        assert_eq!(pcts, vec![100, 25, 9]);
    }

    #[test]
    fn test_equal_keys_keep_fetch_order() {
        // Stable sort: ties on match_percentage preserve input order in both
        // directions.
        let mut rows = vec![row("first", 50), row("second", 50), row("third", 50)];
        sort_rows(
            &mut rows,
            SortState {
                column: SortColumn::MatchPercentage,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(names(&rows), vec!["first", "second", "third"]);

        sort_rows(
            &mut rows,
            SortState {
                column: SortColumn::MatchPercentage,
                direction: SortDirection::Descending,
            },
        );
        assert_eq!(names(&rows), vec!["first", "second", "third"]);
    }
}
