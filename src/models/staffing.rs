//! Staffing counts and the per-day engine input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayForecast;

/// Headcount on each housekeeping shift for one day.
///
/// Classification of employees into day/evening is an upstream concern;
/// the engine only sees the already-classified counts. Rooms are cleaned
/// in pairs: `pairs = n / 2`, and an odd headcount leaves one solo worker
/// who contributes no cleaning capacity in this model but is still
/// surfaced in every period result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCounts {
    /// Workers on the day shift.
    pub day: i32,
    /// Workers on the evening shift.
    pub evening: i32,
}

impl StaffCounts {
    /// Creates staff counts.
    pub fn new(day: i32, evening: i32) -> Self {
        Self { day, evening }
    }

    /// Day-shift pairs.
    #[inline]
    pub fn day_pairs(&self) -> i32 {
        self.day / 2
    }

    /// Unpaired day-shift worker (0 or 1).
    #[inline]
    pub fn day_solo(&self) -> i32 {
        self.day % 2
    }

    /// Evening-shift pairs.
    #[inline]
    pub fn evening_pairs(&self) -> i32 {
        self.evening / 2
    }

    /// Unpaired evening-shift worker (0 or 1).
    #[inline]
    pub fn evening_solo(&self) -> i32 {
        self.evening % 2
    }

    /// Total headcount across both shifts.
    #[inline]
    pub fn total(&self) -> i32 {
        self.day + self.evening
    }
}

/// One day's complete engine input.
///
/// `assigned_hours` is the sum of scheduled shift hours for the day, an
/// external pass-through used only by the hours balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayInput {
    /// Calendar day this input describes.
    pub date: NaiveDate,
    /// Guest-turnover forecast.
    pub forecast: DayForecast,
    /// Staff scheduled on each shift.
    pub staff: StaffCounts,
    /// Total scheduled shift hours for the day.
    pub assigned_hours: f64,
}

impl DayInput {
    /// Creates a day input with zero assigned hours.
    pub fn new(date: NaiveDate, forecast: DayForecast, staff: StaffCounts) -> Self {
        Self {
            date,
            forecast,
            staff,
            assigned_hours: 0.0,
        }
    }

    /// Sets the scheduled shift hours.
    pub fn with_assigned_hours(mut self, hours: f64) -> Self {
        self.assigned_hours = hours;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_and_solo() {
        let staff = StaffCounts::new(5, 4);
        assert_eq!(staff.day_pairs(), 2);
        assert_eq!(staff.day_solo(), 1);
        assert_eq!(staff.evening_pairs(), 2);
        assert_eq!(staff.evening_solo(), 0);
        assert_eq!(staff.total(), 9);
    }

    #[test]
    fn test_zero_staff() {
        let staff = StaffCounts::new(0, 0);
        assert_eq!(staff.day_pairs(), 0);
        assert_eq!(staff.day_solo(), 0);
        assert_eq!(staff.evening_pairs(), 0);
        assert_eq!(staff.evening_solo(), 0);
    }

    #[test]
    fn test_day_input_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let input = DayInput::new(date, DayForecast::new(10, 5, 40), StaffCounts::new(4, 4))
            .with_assigned_hours(64.0);
        assert_eq!(input.date, date);
        assert_eq!(input.assigned_hours, 64.0);
    }
}
