mod support;

use chrono::{Datelike, Duration, TimeZone, Utc};
use standup_backend::{
    models::rotation::Leader,
    services::week_clock::{first_monday_of_year, week_boundary},
    utils::format::{format_workday_range, HOLIDAY_WEEK_LABEL},
};
use support::{date, engine, noon_eastern};

#[test]
fn offset_week_is_led_by_first_roster_member() {
    let engine = engine();
    assert_eq!(week_boundary(34, 2025).unwrap().monday, date(2025, 8, 25));
    assert_eq!(engine.leader_for_week(34, 2025), Leader::Assigned("Allen".into()));
    assert_eq!(engine.leader_for_week(35, 2025), Leader::Assigned("Brad".into()));
    assert_eq!(engine.leader_for_week(33, 2025), Leader::Assigned("Marc".into()));
}

#[test]
fn rotation_repeats_every_roster_length() {
    let engine = engine();
    for week in -30..=30 {
        assert_eq!(engine.index_for_week(week), engine.index_for_week(week + 12));
    }
}

#[test]
fn leader_is_deterministic_across_threads() {
    let expected = engine().leader_for_week(40, 2025);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| engine().leader_for_week(40, 2025)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn year_end_break_is_a_holiday_week() {
    let engine = engine();
    let assignment = engine.assignment_for_week(52, 2025).unwrap();
    assert_eq!(assignment.monday, date(2025, 12, 29));
    assert!(assignment.workdays.is_empty());
    assert_eq!(assignment.leader, Leader::HolidayWeek);
    assert_eq!(
        format_workday_range(&assignment.workdays, HOLIDAY_WEEK_LABEL),
        "Holiday Week"
    );
}

#[test]
fn thanksgiving_week_keeps_three_workdays() {
    let engine = engine();
    let assignment = engine.assignment_for_week(47, 2025).unwrap();
    assert_eq!(
        assignment.workdays,
        vec![date(2025, 11, 24), date(2025, 11, 25), date(2025, 11, 26)]
    );
    assert_eq!(assignment.leader, Leader::Assigned("Brad".into()));
    assert_eq!(
        format_workday_range(&assignment.workdays, HOLIDAY_WEEK_LABEL),
        "Nov 24 – Nov 26"
    );
}

#[test]
fn first_monday_is_always_week_one() {
    let engine = engine();
    for year in 2020..=2030 {
        let monday = first_monday_of_year(year).unwrap();
        let instant = Utc
            .with_ymd_and_hms(year, monday.month(), monday.day(), 15, 0, 0)
            .unwrap();
        assert_eq!(engine.clock().week_number(&instant), 1, "year {}", year);
    }
}

#[test]
fn current_and_next_leader_follow_the_clock() {
    let engine = engine();
    let now = noon_eastern(2025, 11, 25);
    assert_eq!(engine.current_week_at(&now), (47, 2025));
    assert_eq!(engine.current_leader_at(&now), Leader::Assigned("Brad".into()));
    assert_eq!(engine.next_leader_at(&now), Leader::Assigned("Cristian".into()));
}

#[test]
fn next_leader_rolls_into_first_week_of_next_year() {
    let engine = engine();
    let now = noon_eastern(2025, 12, 30);
    assert_eq!(engine.current_leader_at(&now), Leader::HolidayWeek);
    assert_eq!(engine.next_week_at(&now), (1, 2026));
    assert_eq!(engine.next_leader_at(&now), Leader::Assigned("Rich".into()));
}

#[test]
fn sunday_evening_utc_rollover_stays_in_local_week() {
    let engine = engine();
    // 03:00 UTC Monday is still Sunday night in New York.
    let instant = Utc.with_ymd_and_hms(2025, 12, 1, 3, 0, 0).unwrap();
    assert_eq!(engine.current_week_at(&instant), (47, 2025));
    let later = instant + Duration::hours(3);
    assert_eq!(engine.current_week_at(&later), (48, 2025));
}

#[test]
fn year_schedule_counts_holiday_weeks() {
    let engine = engine();
    let schedule = engine.year_schedule(2025);
    assert_eq!(schedule.len(), 52);
    let holiday_weeks: Vec<_> = schedule
        .iter()
        .filter(|a| a.leader.is_holiday_week())
        .map(|a| a.week_number)
        .collect();
    assert_eq!(holiday_weeks, vec![52]);
}

#[test]
fn days_before_first_monday_share_previous_year_leader() {
    let engine = engine();
    let monday = noon_eastern(2026, 12, 28);
    let friday = noon_eastern(2027, 1, 1);
    assert_eq!(engine.current_week_at(&friday), (52, 2026));
    assert_eq!(
        engine.current_leader_at(&monday),
        engine.current_leader_at(&friday)
    );
    assert_eq!(engine.next_week_at(&friday), (1, 2027));
}
