use shared::{DAYS_PER_WEEK, END_HOUR, START_HOUR};
use thiserror::Error;

/// Errors for grid positions outside the schedule.
///
/// Surfaced when a reservation toggle names a slot the grid does not
/// contain (hour outside the 07..19 rows, or a Sunday date).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid hour {0}: must be between 7 and 19")]
    InvalidHour(u32),

    #[error("invalid weekday index {0}: must be below 6")]
    InvalidWeekday(u32),
}

/// Validate an hour against the grid's 07..19 row range.
pub fn check_hour(hour: u32) -> Result<u32, ScheduleError> {
    if (START_HOUR..=END_HOUR).contains(&hour) {
        Ok(hour)
    } else {
        Err(ScheduleError::InvalidHour(hour))
    }
}

/// Validate a weekday index against the Monday..Saturday column range.
pub fn check_weekday(index: u32) -> Result<u32, ScheduleError> {
    if (index as usize) < DAYS_PER_WEEK {
        Ok(index)
    } else {
        Err(ScheduleError::InvalidWeekday(index))
    }
}
