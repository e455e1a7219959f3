use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First hour row of the schedule grid (inclusive).
pub const START_HOUR: u32 = 7;
/// Last hour row of the schedule grid (inclusive).
pub const END_HOUR: u32 = 19;
/// Number of day columns in the grid (Monday..Saturday).
pub const DAYS_PER_WEEK: usize = 6;
/// Number of hour rows in the grid (07:00..19:00).
pub const HOURS_PER_DAY: usize = (END_HOUR - START_HOUR + 1) as usize;

/// A subject from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique, stable identifier (e.g. "PAL404")
    pub code: String,
    /// Display name (e.g. "Programación de Algoritmos")
    pub name: String,
}

impl Subject {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Selector label in the form `"<code> — <name>"`.
    pub fn option_label(&self) -> String {
        format!("{} — {}", self.code, self.name)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.code, self.name)
    }
}

/// Identifies one grid slot across renders.
///
/// The date pins the week and the weekday column; the hour pins the row.
/// Two builds of the same week produce identical keys for the same slot,
/// which is what lets reservation state outlive a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub hour: u32,
}

impl SlotKey {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }
}

/// One interactive cell of the schedule grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCell {
    /// Hour of day, 7..=19
    pub hour: u32,
    /// Day column, 0 = Monday .. 5 = Saturday
    pub weekday_index: u32,
    /// Calendar date of this cell's column
    pub date: NaiveDate,
    /// Subject selected when the grid model was built, if any
    pub subject_code: Option<String>,
}

impl ScheduleCell {
    /// The slot key identifying this cell's grid position.
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.date, self.hour)
    }
}

/// One hour row of the grid: a time label plus six day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Hour of day, 7..=19
    pub hour: u32,
    /// Zero-padded time label, e.g. "07:00"
    pub label: String,
    /// One cell per day column, Monday..Saturday
    pub cells: Vec<ScheduleCell>,
}

/// The in-memory model of one displayed week.
///
/// Built from the picker date (snapped to Monday) and the current subject
/// selection. The display layer is a pure projection of this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Monday starting the displayed week
    pub monday: NaiveDate,
    /// The six displayed dates, Monday..Saturday
    pub days: Vec<NaiveDate>,
    /// Thirteen hour rows, 07:00..19:00
    pub rows: Vec<ScheduleRow>,
}

impl WeekSchedule {
    /// Saturday of the displayed week, derived from the Monday anchor so
    /// it is total even for a schedule with missing day columns.
    pub fn saturday(&self) -> NaiveDate {
        self.monday + Days::new(DAYS_PER_WEEK as u64 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_saturday_derived_from_monday() {
        let schedule = WeekSchedule {
            monday: date(2024, 9, 16),
            days: vec![],
            rows: vec![],
        };
        assert_eq!(schedule.saturday(), date(2024, 9, 21));
    }

    #[test]
    fn test_saturday_on_deserialized_schedule() {
        // A hand-written payload with no day columns must not panic
        let schedule: WeekSchedule =
            serde_json::from_str(r#"{"monday":"2024-09-16","days":[],"rows":[]}"#).unwrap();
        assert_eq!(schedule.saturday(), date(2024, 9, 21));
    }

    #[test]
    fn test_subject_option_label() {
        let subject = Subject::new("PAL404", "Programación de Algoritmos");
        assert_eq!(
            subject.option_label(),
            "PAL404 — Programación de Algoritmos"
        );
        assert_eq!(subject.to_string(), subject.option_label());
    }
}
