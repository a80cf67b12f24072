//! Common validation rules shared across request parameters.

use std::ops::RangeInclusive;

use validator::ValidationError;

/// Years the API accepts for schedule and override requests.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1970..=9999;

/// Week numbers accepted by lookups. The rotation itself normalizes any week,
/// this only keeps dates representable.
pub const QUERYABLE_WEEKS: RangeInclusive<i64> = -1000..=1000;

pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(ValidationError::new("year_out_of_range"));
    }
    Ok(())
}

pub fn validate_query_week(week_number: i64) -> Result<(), ValidationError> {
    if !QUERYABLE_WEEKS.contains(&week_number) {
        return Err(ValidationError::new("week_out_of_range"));
    }
    Ok(())
}

/// Stored weeks must belong to the year: 0 through its last week.
pub fn validate_stored_week(week_number: i32, last_week: i64) -> Result<(), ValidationError> {
    if week_number < 0 || i64::from(week_number) > last_week {
        return Err(ValidationError::new("week_not_in_year"));
    }
    Ok(())
}
