use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of a rotation lookup for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum Leader {
    Assigned(String),
    /// The week has no workdays, so nobody leads.
    HolidayWeek,
}

impl Leader {
    pub fn name(&self) -> Option<&str> {
        match self {
            Leader::Assigned(name) => Some(name),
            Leader::HolidayWeek => None,
        }
    }

    pub fn is_holiday_week(&self) -> bool {
        matches!(self, Leader::HolidayWeek)
    }
}

impl std::fmt::Display for Leader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leader::Assigned(name) => f.write_str(name),
            Leader::HolidayWeek => f.write_str("none"),
        }
    }
}

/// Computed assignment for one `(week_number, year)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationAssignment {
    pub week_number: i64,
    pub year: i32,
    pub monday: NaiveDate,
    pub workdays: Vec<NaiveDate>,
    pub leader: Leader,
}
