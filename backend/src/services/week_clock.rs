//! Calendar-week arithmetic in the reference time zone.
//!
//! Weeks run Monday through Sunday. Week 1 of a year is the week that starts
//! on the first Monday on or after January 1. `week_number_of_date` puts days
//! before that Monday in week 0; `WeekClock::week_of` folds them into the
//! previous year's last week, which covers the same Mon-Fri span. Everything
//! here works on civil dates so DST transitions cannot shift a week boundary.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::utils::time::{civil_date, localize};

/// Monday-to-Friday span of one rotation week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekBoundary {
    pub monday: NaiveDate,
    pub friday: NaiveDate,
}

impl WeekBoundary {
    pub fn from_monday(monday: NaiveDate) -> Self {
        Self {
            monday,
            friday: monday + Duration::days(4),
        }
    }

    /// Monday 00:00:00 in `tz`.
    pub fn starts_at(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        localize(self.monday.and_time(NaiveTime::MIN), tz)
    }

    /// Friday 23:59:59 in `tz`.
    pub fn ends_at(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)?;
        localize(self.friday.and_time(end_of_day), tz)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        (self.monday..=self.friday).contains(&date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekClock {
    time_zone: Tz,
}

impl WeekClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn civil_date<Z: TimeZone>(&self, instant: &DateTime<Z>) -> NaiveDate {
        civil_date(instant, &self.time_zone)
    }

    pub fn year_of<Z: TimeZone>(&self, instant: &DateTime<Z>) -> i32 {
        self.civil_date(instant).year()
    }

    pub fn monday_of_week_containing<Z: TimeZone>(&self, instant: &DateTime<Z>) -> NaiveDate {
        monday_of(self.civil_date(instant))
    }

    pub fn week_number<Z: TimeZone>(&self, instant: &DateTime<Z>) -> i64 {
        week_number_of_date(self.civil_date(instant))
    }

    /// `(week_number, year)` of the week containing `instant`. Days before the
    /// first Monday of a year share their Mon-Fri span with the last week of
    /// the previous year and are reported as that week.
    pub fn week_of<Z: TimeZone>(&self, instant: &DateTime<Z>) -> (i64, i32) {
        let date = self.civil_date(instant);
        rotation_week_of_date(date)
    }

    pub fn week_boundary(&self, week_number: i64, year: i32) -> Option<WeekBoundary> {
        week_boundary(week_number, year)
    }
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Jan 1 when it is a Monday, otherwise the next Monday (Jan 2 when Jan 1 is
/// a Sunday). `None` outside chrono's supported range.
pub fn first_monday_of_year(year: i32) -> Option<NaiveDate> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let days_to_monday = (7 - jan_first.weekday().num_days_from_monday()) % 7;
    jan_first.checked_add_signed(Duration::days(i64::from(days_to_monday)))
}

/// Whole-week distance between the Monday of `date`'s week and the first
/// Monday of `date`'s year, plus one.
pub fn week_number_of_date(date: NaiveDate) -> i64 {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    let ordinal0 = i64::from(date.ordinal0());
    let jan_first_weekday = (weekday - ordinal0).rem_euclid(7);
    let first_monday_ordinal0 = (7 - jan_first_weekday) % 7;
    let monday_ordinal0 = ordinal0 - weekday;
    (monday_ordinal0 - first_monday_ordinal0).div_euclid(7) + 1
}

/// Week key used for rotation and storage: week 0 folds into the previous
/// year's last week, every other week keeps its own number.
pub fn rotation_week_of_date(date: NaiveDate) -> (i64, i32) {
    let week_number = week_number_of_date(date);
    if week_number > 0 {
        return (week_number, date.year());
    }

    date.year()
        .checked_sub(1)
        .and_then(|previous| last_week_of_year(previous).map(|last| (last, previous)))
        .unwrap_or((week_number, date.year()))
}

pub fn week_boundary(week_number: i64, year: i32) -> Option<WeekBoundary> {
    let first_monday = first_monday_of_year(year)?;
    let offset_days = week_number.checked_sub(1)?.checked_mul(7)?;
    let monday = first_monday.checked_add_signed(Duration::try_days(offset_days)?)?;
    monday.checked_add_signed(Duration::days(4))?;
    Some(WeekBoundary::from_monday(monday))
}

/// Number of weeks whose Monday falls inside `year` (52 or 53).
pub fn last_week_of_year(year: i32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, 12, 31).map(week_number_of_date)
}

/// The week after `(week_number, year)`, rolling into week 1 of the next year
/// once the last week of `year` has passed.
pub fn next_week(week_number: i64, year: i32) -> (i64, i32) {
    match last_week_of_year(year) {
        Some(last) if week_number >= last => (1, year + 1),
        _ => (week_number + 1, year),
    }
}
