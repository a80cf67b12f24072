use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::{error::RotationConfigError, models::holiday::Holiday, utils::time::civil_date};

/// Static organization holiday table, keyed by civil date in the reference
/// time zone.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, String>,
    time_zone: Tz,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDecision {
    pub is_workday: bool,
    pub reason: DayKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayKind {
    Holiday(String),
    Weekend,
    Workday,
}

impl DayKind {
    pub fn label(&self) -> &str {
        match self {
            DayKind::Holiday(name) => name,
            DayKind::Weekend => "weekend",
            DayKind::Workday => "working day",
        }
    }
}

impl HolidayCalendar {
    pub fn new(
        holidays: impl IntoIterator<Item = Holiday>,
        time_zone: Tz,
    ) -> Result<Self, RotationConfigError> {
        let mut table = BTreeMap::new();
        for holiday in holidays {
            if table.insert(holiday.date, holiday.name).is_some() {
                return Err(RotationConfigError::DuplicateHoliday(holiday.date));
            }
        }

        Ok(Self {
            holidays: table,
            time_zone,
        })
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Holiday check for an instant: the instant is first reduced to its civil
    /// date in the reference zone, whatever zone the caller supplied.
    pub fn is_holiday_at<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        self.is_holiday(civil_date(instant, &self.time_zone))
    }

    pub fn decision_for(&self, date: NaiveDate) -> HolidayDecision {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return HolidayDecision {
                is_workday: false,
                reason: DayKind::Weekend,
            };
        }

        if let Some(name) = self.holidays.get(&date) {
            return HolidayDecision {
                is_workday: false,
                reason: DayKind::Holiday(name.clone()),
            };
        }

        HolidayDecision {
            is_workday: true,
            reason: DayKind::Workday,
        }
    }

    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.decision_for(date).is_workday
    }

    /// Mon-Fri non-holiday dates in `[start, end]`, ascending. Empty when
    /// `start > end`.
    pub fn workdays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_workday(*day))
            .collect()
    }

    pub fn holidays_in_year(&self, year: i32) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|(date, _)| date.year() == year)
            .map(|(date, name)| Holiday::new(*date, name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar(dates: &[NaiveDate]) -> HolidayCalendar {
        HolidayCalendar::new(
            dates.iter().map(|d| Holiday::new(*d, "Holiday")),
            chrono_tz::America::New_York,
        )
        .unwrap()
    }

    #[test]
    fn day_kind_label_returns_names() {
        assert_eq!(DayKind::Holiday("Juneteenth".into()).label(), "Juneteenth");
        assert_eq!(DayKind::Weekend.label(), "weekend");
        assert_eq!(DayKind::Workday.label(), "working day");
    }

    #[test]
    fn duplicate_holiday_dates_are_rejected() {
        let result = HolidayCalendar::new(
            [
                Holiday::new(date(2025, 7, 4), "Independence Day"),
                Holiday::new(date(2025, 7, 4), "Fourth of July"),
            ],
            chrono_tz::UTC,
        );
        assert!(matches!(result, Err(RotationConfigError::DuplicateHoliday(d)) if d == date(2025, 7, 4)));
    }

    #[test]
    fn weekend_beats_holiday_in_decision() {
        let cal = calendar(&[date(2025, 11, 29)]);
        let decision = cal.decision_for(date(2025, 11, 29));
        assert!(!decision.is_workday);
        assert_eq!(decision.reason, DayKind::Weekend);
    }

    #[test]
    fn holiday_decision_carries_name() {
        let cal = HolidayCalendar::new(
            [Holiday::new(date(2025, 11, 27), "Thanksgiving Day")],
            chrono_tz::UTC,
        )
        .unwrap();
        let decision = cal.decision_for(date(2025, 11, 27));
        assert!(!decision.is_workday);
        assert_eq!(decision.reason, DayKind::Holiday("Thanksgiving Day".into()));
    }

    #[test]
    fn is_holiday_at_uses_reference_zone_date() {
        let cal = calendar(&[date(2025, 7, 4)]);
        // 02:00 UTC on Jul 5 is still Jul 4 in New York.
        let instant = Utc.with_ymd_and_hms(2025, 7, 5, 2, 0, 0).unwrap();
        assert!(cal.is_holiday_at(&instant));
        // 05:00 UTC on Jul 4 is 01:00 on Jul 4 in New York.
        let instant = Utc.with_ymd_and_hms(2025, 7, 4, 5, 0, 0).unwrap();
        assert!(cal.is_holiday_at(&instant));
        // 03:00 UTC on Jul 4 is still Jul 3 in New York.
        let instant = Utc.with_ymd_and_hms(2025, 7, 4, 3, 0, 0).unwrap();
        assert!(!cal.is_holiday_at(&instant));
    }

    #[test]
    fn workdays_skip_weekends_and_holidays() {
        let cal = calendar(&[date(2025, 11, 27), date(2025, 11, 28)]);
        let days = cal.workdays_in_range(date(2025, 11, 23), date(2025, 11, 30));
        assert_eq!(
            days,
            vec![date(2025, 11, 24), date(2025, 11, 25), date(2025, 11, 26)]
        );
    }

    #[test]
    fn workdays_empty_when_every_weekday_is_holiday() {
        let cal = calendar(&[
            date(2025, 12, 29),
            date(2025, 12, 30),
            date(2025, 12, 31),
            date(2026, 1, 1),
            date(2026, 1, 2),
        ]);
        assert!(cal
            .workdays_in_range(date(2025, 12, 29), date(2026, 1, 2))
            .is_empty());
    }

    #[test]
    fn workdays_empty_for_inverted_range() {
        let cal = calendar(&[]);
        assert!(cal
            .workdays_in_range(date(2025, 1, 10), date(2025, 1, 6))
            .is_empty());
    }

    #[test]
    fn workdays_single_day_range_is_inclusive() {
        let cal = calendar(&[]);
        assert_eq!(
            cal.workdays_in_range(date(2025, 1, 6), date(2025, 1, 6)),
            vec![date(2025, 1, 6)]
        );
    }

    #[test]
    fn holidays_in_year_filters_and_orders() {
        let cal = calendar(&[date(2026, 1, 1), date(2025, 12, 25), date(2025, 1, 1)]);
        let dates: Vec<_> = cal.holidays_in_year(2025).into_iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2025, 1, 1), date(2025, 12, 25)]);
        assert_eq!(cal.len(), 3);
    }
}
