//! The per-cell reservation toggle model.
//!
//! Reservations are held in an explicit in-memory set keyed by
//! [`SlotKey`], separate from the display layer. Because the key is the
//! cell's calendar date plus hour, toggles survive grid rebuilds: navigate
//! away and back and the same cells are still marked. Nothing is persisted
//! to disk.

use chrono::Datelike;
use log::debug;
use shared::SlotKey;
use std::collections::HashSet;

use super::error::{check_hour, check_weekday, ScheduleError};

/// Set of reserved grid slots.
#[derive(Debug, Default, Clone)]
pub struct ReservationSet {
    reserved: HashSet<SlotKey>,
}

impl ReservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a slot and return its new reserved state.
    ///
    /// Slots outside the grid are rejected: the hour must fall in the
    /// 07..19 row range and the date must not be a Sunday.
    pub fn toggle(&mut self, slot: SlotKey) -> Result<bool, ScheduleError> {
        check_hour(slot.hour)?;
        check_weekday(slot.date.weekday().num_days_from_monday())?;

        let now_reserved = if self.reserved.remove(&slot) {
            false
        } else {
            self.reserved.insert(slot);
            true
        };
        debug!(
            "Toggled slot {} {:02}:00 -> reserved={}",
            slot.date, slot.hour, now_reserved
        );
        Ok(now_reserved)
    }

    /// Whether a slot is currently reserved.
    pub fn is_reserved(&self, slot: &SlotKey) -> bool {
        self.reserved.contains(slot)
    }

    /// Number of reserved slots across all weeks.
    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn slot(day: u32, hour: u32) -> SlotKey {
        SlotKey::new(NaiveDate::from_ymd_opt(2024, 9, day).unwrap(), hour)
    }

    #[test]
    fn test_toggle_sets_and_clears() {
        let mut reservations = ReservationSet::new();
        assert!(!reservations.is_reserved(&slot(16, 7)));

        assert!(reservations.toggle(slot(16, 7)).unwrap());
        assert!(reservations.is_reserved(&slot(16, 7)));

        assert!(!reservations.toggle(slot(16, 7)).unwrap());
        assert!(!reservations.is_reserved(&slot(16, 7)));
        assert!(reservations.is_empty());
    }

    #[test]
    fn test_toggle_affects_only_one_slot() {
        let mut reservations = ReservationSet::new();
        reservations.toggle(slot(16, 7)).unwrap();
        assert!(!reservations.is_reserved(&slot(16, 8)));
        assert!(!reservations.is_reserved(&slot(17, 7)));
        assert_eq!(reservations.len(), 1);
    }

    #[test]
    fn test_toggle_rejects_slots_outside_grid() {
        let mut reservations = ReservationSet::new();

        // Hour outside the 07..19 rows
        assert_eq!(
            reservations.toggle(slot(16, 6)),
            Err(ScheduleError::InvalidHour(6))
        );
        // 2024-09-22 is a Sunday, not a grid column
        assert_eq!(
            reservations.toggle(slot(22, 9)),
            Err(ScheduleError::InvalidWeekday(6))
        );
        assert!(reservations.is_empty());
    }

    #[test]
    fn test_reservations_keyed_by_date_survive_week_changes() {
        // Slots from two different weeks coexist; nothing about building a
        // new week model touches the set.
        let mut reservations = ReservationSet::new();
        reservations.toggle(slot(16, 9)).unwrap(); // week of Sep 16
        reservations.toggle(slot(23, 9)).unwrap(); // week of Sep 23

        assert!(reservations.is_reserved(&slot(16, 9)));
        assert!(reservations.is_reserved(&slot(23, 9)));
        assert_eq!(reservations.len(), 2);
    }

    #[test]
    fn test_len_counts_all_weeks() {
        let mut reservations = ReservationSet::new();
        reservations.toggle(slot(16, 7)).unwrap();
        reservations.toggle(slot(18, 12)).unwrap();
        reservations.toggle(slot(23, 7)).unwrap();
        assert_eq!(reservations.len(), 3);
        assert!(!reservations.is_empty());
    }
}
