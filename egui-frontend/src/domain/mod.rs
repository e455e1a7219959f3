//! Domain logic for the schedule planner.
//!
//! Pure date computations, the subject catalog, locale-aware formatting and
//! the reservation model live here. The UI only handles presentation
//! concerns; everything it displays is derived from these modules.

pub mod catalog;
pub mod error;
pub mod locale;
pub mod reservations;
pub mod week;

pub use catalog::SubjectCatalog;
pub use error::ScheduleError;
pub use locale::DateLocale;
pub use reservations::ReservationSet;
