//! CSV export of the current filtered+sorted row set.
//!
//! Export always covers the whole filtered set, never the visible page. Fields
//! containing quotes/commas/newlines are double-quoted with internal quotes
//! doubled — the `csv` writer's default quoting.

use crate::models::match_row::MatchRow;

/// Fixed download filename for both dashboards.
pub const EXPORT_FILENAME: &str = "match_report.csv";

const HEADERS: [&str; 11] = [
    "Name",
    "Company",
    "Email",
    "Phone",
    "Role",
    "Type",
    "Pay",
    "Experience",
    "Location",
    "Work Mode",
    "Match %",
];

/// Serializes rows to CSV text: one header line plus one line per row.
pub fn rows_to_csv(rows: &[MatchRow]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
    writer.write_record(HEADERS)?;

    for row in rows {
        writer.write_record(&[
            row.name.as_str(),
            row.company.as_str(),
            row.email.as_str(),
            row.phone.as_str(),
            row.role.as_str(),
            &format_type(row),
            row.pay_per_hour.as_str(),
            row.experience.as_str(),
            row.location.as_str(),
            row.work_mode.map(|m| m.label()).unwrap_or(""),
            &row.match_percentage.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes).expect("csv output is valid utf-8"))
}

fn format_type(row: &MatchRow) -> String {
    match (row.job_type, row.job_sub_type) {
        (Some(job_type), Some(sub)) => format!("{} ({})", job_type.label(), sub.label()),
        (Some(job_type), None) => job_type.label().to_string(),
        (None, _) => String::new(),
    }
}
