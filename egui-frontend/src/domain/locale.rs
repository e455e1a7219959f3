//! Locale-aware date formatting.
//!
//! All display text goes through [`DateLocale`] so the date-math core stays
//! locale-independent. The application ships a single fixed es-ES locale;
//! the tables are explicit rather than pulled from the system so output is
//! stable across platforms.

use chrono::{Datelike, NaiveDate};

/// Weekday and month name tables plus the formats built from them.
#[derive(Debug, Clone)]
pub struct DateLocale {
    /// Abbreviated weekday names, Monday first (e.g. "lun")
    pub weekdays_short: [&'static str; 7],
    /// Full weekday names, Monday first (e.g. "lunes")
    pub weekdays_long: [&'static str; 7],
    /// Abbreviated month names, January first (e.g. "sep")
    pub months_short: [&'static str; 12],
    /// Full month names, January first (e.g. "septiembre")
    pub months_long: [&'static str; 12],
}

impl DateLocale {
    /// The fixed es-ES locale used throughout the app.
    pub fn spanish() -> Self {
        Self {
            weekdays_short: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
            weekdays_long: [
                "lunes",
                "martes",
                "miércoles",
                "jueves",
                "viernes",
                "sábado",
                "domingo",
            ],
            months_short: [
                "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
            ],
            months_long: [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ],
        }
    }

    /// Abbreviated weekday name, using chrono's Monday-first numbering.
    pub fn weekday_short(&self, date: NaiveDate) -> &'static str {
        self.weekdays_short[date.weekday().num_days_from_monday() as usize]
    }

    /// Full weekday name.
    pub fn weekday_long(&self, date: NaiveDate) -> &'static str {
        self.weekdays_long[date.weekday().num_days_from_monday() as usize]
    }

    /// Abbreviated month name for a 1-based month number.
    pub fn month_short(&self, month: u32) -> &'static str {
        self.months_short[(month - 1) as usize]
    }

    /// Full month name for a 1-based month number.
    pub fn month_long(&self, month: u32) -> &'static str {
        self.months_long[(month - 1) as usize]
    }

    /// Day-column header, e.g. "lun 16 sep".
    pub fn format_day_header(&self, date: NaiveDate) -> String {
        format!(
            "{} {} {}",
            self.weekday_short(date),
            date.day(),
            self.month_short(date.month())
        )
    }

    /// Short day-month form, e.g. "16 sep".
    pub fn format_day_month(&self, date: NaiveDate) -> String {
        format!("{} {}", date.day(), self.month_short(date.month()))
    }

    /// Day-month-year form, e.g. "21 sep 2024".
    pub fn format_day_month_year(&self, date: NaiveDate) -> String {
        format!(
            "{} {} {}",
            date.day(),
            self.month_short(date.month()),
            date.year()
        )
    }

    /// Long-form date, e.g. "miércoles, 18 de septiembre de 2024".
    pub fn format_long(&self, date: NaiveDate) -> String {
        format!(
            "{}, {} de {} de {}",
            self.weekday_long(date),
            date.day(),
            self.month_long(date.month()),
            date.year()
        )
    }
}

impl Default for DateLocale {
    fn default() -> Self {
        Self::spanish()
    }
}
