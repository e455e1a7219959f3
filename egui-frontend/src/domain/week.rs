//! Week date math and grid model construction.
//!
//! The functions here are pure: given a picker date and a subject
//! selection they compute the displayed week and the full typed grid
//! model. Month and year rollover is handled by chrono.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use shared::{ScheduleCell, ScheduleRow, WeekSchedule, DAYS_PER_WEEK, END_HOUR, START_HOUR};

use super::locale::DateLocale;

/// The Monday on or before `date` (ISO week convention, Monday = 0).
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Days::new(days_from_monday as u64)
}

/// Offset `date` by `n` days; `n` may be negative.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    if n >= 0 {
        date + Days::new(n as u64)
    } else {
        date - Days::new(n.unsigned_abs())
    }
}

/// The six displayed dates of the week starting at `monday`.
pub fn week_days(monday: NaiveDate) -> Vec<NaiveDate> {
    (0..DAYS_PER_WEEK as i64).map(|i| add_days(monday, i)).collect()
}

/// Build the week grid model for a picker date and subject selection.
///
/// The picker date is snapped to its Monday; the subject code is captured
/// into every cell at build time.
pub fn build_week_schedule(picker_date: NaiveDate, subject_code: Option<&str>) -> WeekSchedule {
    let monday = monday_of(picker_date);
    let days = week_days(monday);
    debug!(
        "Building week schedule: monday={}, subject={:?}",
        monday, subject_code
    );

    let rows = (START_HOUR..=END_HOUR)
        .map(|hour| {
            let cells = days
                .iter()
                .enumerate()
                .map(|(weekday_index, date)| ScheduleCell {
                    hour,
                    weekday_index: weekday_index as u32,
                    date: *date,
                    subject_code: subject_code.map(str::to_string),
                })
                .collect();
            ScheduleRow {
                hour,
                label: format!("{:02}:00", hour),
                cells,
            }
        })
        .collect();

    WeekSchedule { monday, days, rows }
}

/// Summary label for the displayed week.
///
/// `"Semana: <d mmm> — <d mmm yyyy>"`, with `" — Materia: <code>"`
/// appended when a subject is selected.
pub fn summary_label(
    picker_date: NaiveDate,
    subject_code: Option<&str>,
    locale: &DateLocale,
) -> String {
    let monday = monday_of(picker_date);
    let saturday = add_days(monday, (DAYS_PER_WEEK - 1) as i64);
    let mut label = format!(
        "Semana: {} — {}",
        locale.format_day_month(monday),
        locale.format_day_month_year(saturday)
    );
    if let Some(code) = subject_code {
        label.push_str(&format!(" — Materia: {}", code));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use shared::HOURS_PER_DAY;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_falls_on_monday() {
        // One date per weekday of the same week
        for day in 16..=22 {
            let d = date(2024, 9, day);
            let monday = monday_of(d);
            assert_eq!(monday.weekday(), Weekday::Mon);
            let diff = (d - monday).num_days();
            assert!((0..=6).contains(&diff), "diff {} out of range", diff);
        }
    }

    #[test]
    fn test_monday_of_known_dates() {
        // Wednesday snaps back to its Monday
        assert_eq!(monday_of(date(2024, 9, 18)), date(2024, 9, 16));
        // Monday is a fixed point
        assert_eq!(monday_of(date(2024, 9, 16)), date(2024, 9, 16));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(monday_of(date(2024, 9, 22)), date(2024, 9, 16));
    }

    #[test]
    fn test_monday_of_crosses_month_boundary() {
        // 2024-10-01 is a Tuesday, its Monday is in September
        assert_eq!(monday_of(date(2024, 10, 1)), date(2024, 9, 30));
        // 2025-01-01 is a Wednesday, its Monday is in the previous year
        assert_eq!(monday_of(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(date(2024, 9, 18), 7), date(2024, 9, 25));
        assert_eq!(add_days(date(2024, 9, 18), -7), date(2024, 9, 11));
        assert_eq!(add_days(date(2024, 9, 30), 2), date(2024, 10, 2));
        // Leap day rollover
        assert_eq!(add_days(date(2024, 2, 28), 1), date(2024, 2, 29));
    }

    #[test]
    fn test_week_days_consecutive_monday_to_saturday() {
        let monday = monday_of(date(2024, 9, 18));
        let days = week_days(monday);
        assert_eq!(days.len(), 6);
        assert_eq!(days[0], date(2024, 9, 16));
        assert_eq!(days[5], date(2024, 9, 21));
        for i in 1..days.len() {
            assert_eq!((days[i] - days[i - 1]).num_days(), 1);
        }
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[5].weekday(), Weekday::Sat);
    }

    #[test]
    fn test_build_week_schedule_shape() {
        let schedule = build_week_schedule(date(2024, 9, 18), None);
        assert_eq!(schedule.monday, date(2024, 9, 16));
        assert_eq!(schedule.days.len(), 6);
        assert_eq!(schedule.rows.len(), HOURS_PER_DAY);
        assert_eq!(schedule.rows.len(), 13);
        for row in &schedule.rows {
            assert_eq!(row.cells.len(), 6);
        }
        assert_eq!(schedule.rows[0].hour, 7);
        assert_eq!(schedule.rows[0].label, "07:00");
        assert_eq!(schedule.rows[12].hour, 19);
        assert_eq!(schedule.rows[12].label, "19:00");
        assert_eq!(schedule.saturday(), date(2024, 9, 21));
    }

    #[test]
    fn test_build_week_schedule_cell_metadata() {
        let schedule = build_week_schedule(date(2024, 9, 18), Some("PAL404"));
        for row in &schedule.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                assert_eq!(cell.hour, row.hour);
                assert_eq!(cell.weekday_index, i as u32);
                assert_eq!(cell.date, schedule.days[i]);
                assert_eq!(cell.subject_code.as_deref(), Some("PAL404"));
            }
        }
    }

    #[test]
    fn test_cell_coordinates_unique_within_week() {
        let schedule = build_week_schedule(date(2024, 9, 18), None);
        let mut seen = std::collections::HashSet::new();
        for row in &schedule.rows {
            for cell in &row.cells {
                assert!(seen.insert((cell.hour, cell.weekday_index)));
            }
        }
        assert_eq!(seen.len(), 13 * 6);
    }

    #[test]
    fn test_next_week_twice_advances_fourteen_days() {
        let start = date(2024, 9, 18);
        let after = add_days(add_days(start, 7), 7);
        assert_eq!(after, date(2024, 10, 2));
    }

    #[test]
    fn test_summary_label_without_subject() {
        let locale = DateLocale::spanish();
        assert_eq!(
            summary_label(date(2024, 9, 18), None, &locale),
            "Semana: 16 sep — 21 sep 2024"
        );
    }

    #[test]
    fn test_summary_label_with_subject() {
        let locale = DateLocale::spanish();
        assert_eq!(
            summary_label(date(2024, 9, 18), Some("PAL404"), &locale),
            "Semana: 16 sep — 21 sep 2024 — Materia: PAL404"
        );
    }

    #[test]
    fn test_summary_label_week_spanning_year_boundary() {
        let locale = DateLocale::spanish();
        // Week of 2024-12-30 runs Monday Dec 30 .. Saturday Jan 4
        assert_eq!(
            summary_label(date(2025, 1, 1), None, &locale),
            "Semana: 30 dic — 4 ene 2025"
        );
    }
}
