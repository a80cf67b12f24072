use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An organization holiday: one whole civil day in the reference timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HolidayResponse {
    pub date: NaiveDate,
    pub name: String,
    pub weekday: String,
}

impl From<&Holiday> for HolidayResponse {
    fn from(value: &Holiday) -> Self {
        Self {
            date: value.date,
            name: value.name.clone(),
            weekday: value.date.weekday().to_string(),
        }
    }
}
