//! Match Filtering & Ranking Pipeline.
//!
//! Raw match records → filter → sort → paginate → gated rows. Rows are
//! ephemeral: assembled fresh from each fetch, never stored. The pure stages
//! live in their own modules; [`TableState`] captures the client-visible state
//! rules (sort toggling resets to page one, a changed row count resets to page
//! one, page-size changes clamp).

pub mod csv_export;
pub mod filters;
pub mod gating;
pub mod handlers;
pub mod pagination;
pub mod sort;

use crate::models::match_row::MatchRow;
use crate::models::profile::VisibilityPackage;

use filters::RowFilter;
use pagination::{clamp_page, page_count, paginate, DEFAULT_PAGE_SIZE};
use sort::{sort_rows, SortColumn, SortState};

/// Table view state as the dashboards track it between interactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableState {
    pub sort: Option<SortState>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        TableState {
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    /// Column-header click: toggle/re-aim the sort and return to page one.
    pub fn select_sort(&mut self, column: SortColumn) {
        self.sort = Some(SortState::toggle(self.sort, column));
        self.page = 0;
    }

    /// A refetch changed the row count: back to page one.
    pub fn rows_changed(&mut self, old_total: usize, new_total: usize) {
        if old_total != new_total {
            self.page = 0;
        }
    }
}

/// One rendered page plus the bookkeeping the table chrome needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<MatchRow>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

/// Runs filter + sort, the shared prefix of both the table view and the CSV
/// export.
pub fn filter_and_sort(
    rows: Vec<MatchRow>,
    membership: Option<&VisibilityPackage>,
    filter: &RowFilter,
    sort: Option<SortState>,
) -> Vec<MatchRow> {
    let mut rows = filters::apply_filters(rows, membership, filter);
    if let Some(state) = sort {
        sort_rows(&mut rows, state);
    }
    rows
}

/// Cuts one clamped page out of an already filtered+sorted row set.
pub fn build_page(rows: Vec<MatchRow>, page: usize, page_size: usize) -> TablePage {
    let total_rows = rows.len();
    let page = clamp_page(page, total_rows, page_size);
    let visible = paginate(&rows, page, page_size).to_vec();
    TablePage {
        rows: visible,
        page,
        page_count: page_count(total_rows, page_size),
        total_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::sort::SortDirection;
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

    #[test]
    fn test_select_sort_resets_page() {
        let mut state = TableState {
            page: 4,
            ..TableState::default()
        };
        state.select_sort(SortColumn::Name);
        assert_eq!(state.page, 0);
        assert_eq!(
            state.sort,
            Some(SortState {
                column: SortColumn::Name,
                direction: SortDirection::Ascending,
            })
        );
    }

    #[test]
    fn test_rows_changed_resets_page_only_on_difference() {
        let mut state = TableState {
            page: 3,
            ..TableState::default()
        };
        state.rows_changed(40, 40);
        assert_eq!(state.page, 3);
        state.rows_changed(40, 12);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_build_page_clamps_out_of_range_page() {
        let rows: Vec<MatchRow> = (0..23).map(|i| row(&format!("r{i}"), 50)).collect();
        // Page 5 of a 3-page set at size 10 clamps to the last page.
        let page = build_page(rows, 5, 10);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total_rows, 23);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn test_filter_and_sort_composes() {
        let rows = vec![row("bee", 10), row("Ant", 90), row("cat", 40)];
        let sorted = filter_and_sort(
            rows,
            None,
            &filters::RowFilter::default(),
            Some(SortState {
                column: SortColumn::MatchPercentage,
                direction: SortDirection::Descending,
            }),
        );
        let pcts: Vec<u8> = sorted.iter().map(|r| r.match_percentage).collect();
        assert_eq!(pcts, vec![90, 40, 10]);
    }

    #[test]
    fn test_build_page_empty_set() {
        let page = build_page(Vec::new(), 2, 25);
        assert_eq!(page.page, 0);
        assert_eq!(page.page_count, 0);
        assert!(page.rows.is_empty());
    }
}
