//! Display helpers for week date ranges.

use chrono::NaiveDate;

pub const HOLIDAY_WEEK_LABEL: &str = "Holiday Week";
pub const NO_STANDUP_LABEL: &str = "No standup this week";

const DAY_FORMAT: &str = "%b %-d";

/// Renders the first and last workday as `"Nov 24 – Nov 26"`, or
/// `empty_label` when the week has no workdays.
pub fn format_workday_range(workdays: &[NaiveDate], empty_label: &str) -> String {
    match (workdays.first(), workdays.last()) {
        (Some(first), Some(last)) => format!(
            "{} – {}",
            first.format(DAY_FORMAT),
            last.format(DAY_FORMAT)
        ),
        _ => empty_label.to_string(),
    }
}
