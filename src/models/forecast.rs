//! Guest-turnover forecast for one calendar day.

use serde::{Deserialize, Serialize};

/// A day's forecast: departures, arrivals, and occupied rooms.
///
/// All counts are whole rooms and must be non-negative; negative values
/// are rejected by input validation, not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Rooms whose guests depart today (full departure clean).
    pub departures: i32,
    /// Rooms whose guests arrive today.
    pub arrivals: i32,
    /// Rooms occupied tonight (each needs turndown service).
    pub occupied: i32,
}

impl DayForecast {
    /// Creates a forecast.
    pub fn new(departures: i32, arrivals: i32, occupied: i32) -> Self {
        Self {
            departures,
            arrivals,
            occupied,
        }
    }

    /// Rooms occupied by guests not arriving today. Each needs a mid-stay
    /// service (recouche).
    #[inline]
    pub fn stays(&self) -> i32 {
        (self.occupied - self.arrivals).max(0)
    }

    /// Total rooms to clean today: departures plus stays.
    #[inline]
    pub fn total_rooms(&self) -> i32 {
        self.departures + self.stays()
    }
}
