//! # App State Module
//!
//! The central application object. `HorarioApp` is constructed once per
//! mount point and owns every handle the original relied on globals for:
//! the subject catalog, the display locale and the schedule state.

use log::info;

use crate::domain::catalog::SubjectCatalog;
use crate::domain::locale::DateLocale;
use crate::domain::week::summary_label;
use crate::ui::state::ScheduleState;

/// Main application struct for the egui schedule planner
pub struct HorarioApp {
    /// Static subject catalog, created once at startup
    pub catalog: SubjectCatalog,

    /// Fixed es-ES display locale
    pub locale: DateLocale,

    /// Week view state (picker date, subject, grid model, reservations)
    pub schedule: ScheduleState,
}

impl HorarioApp {
    /// Create a new HorarioApp with default values
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing HorarioApp");

        Ok(Self {
            catalog: SubjectCatalog::new(),
            locale: DateLocale::spanish(),
            schedule: ScheduleState::new(),
        })
    }

    /// The summary label for the displayed week, recomputed per frame.
    pub fn summary_label(&self) -> String {
        summary_label(
            self.schedule.picker_date,
            self.schedule.selected_subject.as_deref(),
            &self.locale,
        )
    }

    /// Long-form display of the picker date, e.g.
    /// "miércoles, 18 de septiembre de 2024".
    pub fn pretty_picker_date(&self) -> String {
        self.locale.format_long(self.schedule.picker_date)
    }
}
