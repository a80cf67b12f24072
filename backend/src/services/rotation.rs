//! Weekly standup leader rotation.
//!
//! A leader is a pure function of `(week_number, year)`, the roster, the
//! calibration offset and the holiday table. Callers on different threads
//! always agree for the same inputs.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    config::RotationSettings,
    error::RotationConfigError,
    models::{
        roster::TeamRoster,
        rotation::{Leader, RotationAssignment},
    },
    services::{
        holiday::HolidayCalendar,
        week_clock::{self, WeekClock},
    },
};

#[derive(Debug, Clone)]
pub struct RotationEngine {
    roster: TeamRoster,
    offset: i64,
    calendar: HolidayCalendar,
    clock: WeekClock,
}

impl RotationEngine {
    /// `offset` is the week number in which `roster[0]` leads.
    pub fn new(roster: TeamRoster, offset: i64, calendar: HolidayCalendar) -> Self {
        let clock = WeekClock::new(calendar.time_zone());
        Self {
            roster,
            offset,
            calendar,
            clock,
        }
    }

    pub fn from_settings(
        settings: &RotationSettings,
        time_zone: Tz,
    ) -> Result<Self, RotationConfigError> {
        let roster = TeamRoster::new(settings.roster.iter().cloned())?;
        let calendar = HolidayCalendar::new(settings.holidays.iter().cloned(), time_zone)?;
        Ok(Self::new(roster, settings.offset, calendar))
    }

    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn clock(&self) -> &WeekClock {
        &self.clock
    }

    /// `((week - offset) mod N + N) mod N`, computed without overflow for any
    /// `i64` week.
    pub fn index_for_week(&self, week_number: i64) -> usize {
        let size = self.roster.len() as i128;
        (i128::from(week_number) - i128::from(self.offset)).rem_euclid(size) as usize
    }

    /// Workdays of the Mon-Fri span of the given week. Weeks that fall outside
    /// the representable calendar have none.
    pub fn workdays_for_week(&self, week_number: i64, year: i32) -> Vec<NaiveDate> {
        match week_clock::week_boundary(week_number, year) {
            Some(boundary) => self
                .calendar
                .workdays_in_range(boundary.monday, boundary.friday),
            None => Vec::new(),
        }
    }

    pub fn leader_for_week(&self, week_number: i64, year: i32) -> Leader {
        let workdays = self.workdays_for_week(week_number, year);
        self.leader_for_workdays(week_number, &workdays)
    }

    fn leader_for_workdays(&self, week_number: i64, workdays: &[NaiveDate]) -> Leader {
        if workdays.is_empty() {
            return Leader::HolidayWeek;
        }

        let index = self.index_for_week(week_number);
        match self.roster.get(index) {
            Some(name) => Leader::Assigned(name.to_string()),
            None => Leader::HolidayWeek,
        }
    }

    pub fn assignment_for_week(&self, week_number: i64, year: i32) -> Option<RotationAssignment> {
        let boundary = week_clock::week_boundary(week_number, year)?;
        let workdays = self
            .calendar
            .workdays_in_range(boundary.monday, boundary.friday);
        let leader = self.leader_for_workdays(week_number, &workdays);

        Some(RotationAssignment {
            week_number,
            year,
            monday: boundary.monday,
            workdays,
            leader,
        })
    }

    pub fn current_week_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> (i64, i32) {
        self.clock.week_of(now)
    }

    pub fn next_week_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> (i64, i32) {
        let (week_number, year) = self.current_week_at(now);
        week_clock::next_week(week_number, year)
    }

    pub fn current_leader_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> Leader {
        let (week_number, year) = self.current_week_at(now);
        self.leader_for_week(week_number, year)
    }

    pub fn next_leader_at<Z: TimeZone>(&self, now: &DateTime<Z>) -> Leader {
        let (week_number, year) = self.next_week_at(now);
        self.leader_for_week(week_number, year)
    }

    pub fn current_leader(&self) -> Leader {
        self.current_leader_at(&Utc::now())
    }

    pub fn next_leader(&self) -> Leader {
        self.next_leader_at(&Utc::now())
    }

    /// Every week whose Monday falls in `year`, in order.
    pub fn year_schedule(&self, year: i32) -> Vec<RotationAssignment> {
        let Some(last_week) = week_clock::last_week_of_year(year) else {
            return Vec::new();
        };

        (1..=last_week)
            .filter_map(|week_number| self.assignment_for_week(week_number, year))
            .collect()
    }
}
