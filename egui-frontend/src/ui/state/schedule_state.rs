//! # Schedule State Module
//!
//! All state behind the week view and its navigation: the picker date, the
//! current subject selection, the built week model and the reservation set.
//!
//! The week model is rebuilt on every transition (navigation, picker
//! change, subject change); reservations live outside the model and are
//! untouched by rebuilds.

use chrono::{Local, NaiveDate};

use crate::domain::reservations::ReservationSet;
use crate::domain::week::{add_days, build_week_schedule};
use shared::WeekSchedule;

/// State for the week view: picker anchor, subject selection, grid model.
#[derive(Debug)]
pub struct ScheduleState {
    /// Date currently selected by the user, anchor for "current week".
    /// Kept as picked, not snapped; only the rendered week start snaps to
    /// Monday.
    pub picker_date: NaiveDate,

    /// Currently selected subject code, if any
    pub selected_subject: Option<String>,

    /// The built grid model for the displayed week
    pub week: WeekSchedule,

    /// Reserved slots across all weeks
    pub reservations: ReservationSet,
}

impl ScheduleState {
    /// Create new schedule state anchored on today's local date.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self::anchored_on(today)
    }

    /// Create schedule state anchored on a specific date.
    pub fn anchored_on(picker_date: NaiveDate) -> Self {
        Self {
            picker_date,
            selected_subject: None,
            week: build_week_schedule(picker_date, None),
            reservations: ReservationSet::new(),
        }
    }

    /// Rebuild the week model from the current picker date and subject.
    pub fn rebuild(&mut self) {
        self.week = build_week_schedule(self.picker_date, self.selected_subject.as_deref());
    }

    /// Navigate to the previous week
    pub fn navigate_to_previous_week(&mut self) {
        self.picker_date = add_days(self.picker_date, -7);
        self.rebuild();
        log::info!("📅 Navigated to previous week: {}", self.week.monday);
    }

    /// Navigate to the next week
    pub fn navigate_to_next_week(&mut self) {
        self.picker_date = add_days(self.picker_date, 7);
        self.rebuild();
        log::info!("📅 Navigated to next week: {}", self.week.monday);
    }

    /// Change the subject selection and rebuild the model.
    pub fn select_subject(&mut self, code: Option<String>) {
        self.selected_subject = code;
        self.rebuild();
        log::info!(
            "📚 Subject selection changed: {:?}",
            self.selected_subject
        );
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::new()
    }
}
