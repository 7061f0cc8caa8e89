//! Engine configuration: task durations and period lengths.
//!
//! All values are minutes. Defaults match the standard housekeeping setup
//! (departure clean 50 min, recouche 20 min, turndown 20 min; periods
//! 210/210/90 min with a 210 min turndown window) and apply whenever no
//! override is supplied. Explicitly supplied values are validated at
//! engine construction: zero or negative durations fail fast instead of
//! being clamped.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default departure-clean duration per pair (min).
pub const DEFAULT_DEPART_MINUTES: i64 = 50;
/// Default recouche (mid-stay service) duration per pair (min).
pub const DEFAULT_RECOUCHE_MINUTES: i64 = 20;
/// Default turndown duration per room (min).
pub const DEFAULT_TURNDOWN_MINUTES: i64 = 20;

/// Default length of P1, the morning-only period (min).
pub const DEFAULT_P1_MINUTES: i64 = 210;
/// Default length of P2, the morning+evening overlap period (min).
pub const DEFAULT_P2_MINUTES: i64 = 210;
/// Default length of P3, the evening finishing period (min).
pub const DEFAULT_P3_MINUTES: i64 = 90;
/// Default length of the turndown period (min).
pub const DEFAULT_TURNDOWN_PERIOD_MINUTES: i64 = 210;

/// A clock-time interval, in minutes from midnight. Half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (minutes from midnight, inclusive).
    pub start_minute: i64,
    /// Window end (minutes from midnight, exclusive).
    pub end_minute: i64,
}

impl TimeWindow {
    /// Creates a new window.
    pub fn new(start_minute: i64, end_minute: i64) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Duration of this window (min).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_minute - self.start_minute
    }
}

/// Per-room service durations, in pair-minutes.
///
/// `turndown_window`, when set, fixes the clock interval in which turndown
/// runs; its duration then overrides the configured turndown period length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCosts {
    /// Departure clean, per pair (min).
    pub depart_minutes: i64,
    /// Recouche, per pair (min).
    pub recouche_minutes: i64,
    /// Turndown, per person (min).
    pub turndown_minutes: i64,
    /// Earliest-start/latest-end window for turndown service.
    pub turndown_window: Option<TimeWindow>,
}

impl TaskCosts {
    /// Sets the departure-clean duration.
    pub fn with_depart_minutes(mut self, minutes: i64) -> Self {
        self.depart_minutes = minutes;
        self
    }

    /// Sets the recouche duration.
    pub fn with_recouche_minutes(mut self, minutes: i64) -> Self {
        self.recouche_minutes = minutes;
        self
    }

    /// Sets the turndown duration.
    pub fn with_turndown_minutes(mut self, minutes: i64) -> Self {
        self.turndown_minutes = minutes;
        self
    }

    /// Sets the turndown clock window.
    pub fn with_turndown_window(mut self, window: TimeWindow) -> Self {
        self.turndown_window = Some(window);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("depart_minutes", self.depart_minutes),
            ("recouche_minutes", self.recouche_minutes),
            ("turndown_minutes", self.turndown_minutes),
        ];
        for (field, value) in durations {
            if value <= 0 {
                return Err(ConfigError::NonPositiveDuration { field, value });
            }
        }
        if let Some(window) = self.turndown_window {
            if window.duration_minutes() <= 0 {
                return Err(ConfigError::EmptyTurndownWindow {
                    start_minute: window.start_minute,
                    end_minute: window.end_minute,
                });
            }
        }
        Ok(())
    }
}

impl Default for TaskCosts {
    fn default() -> Self {
        Self {
            depart_minutes: DEFAULT_DEPART_MINUTES,
            recouche_minutes: DEFAULT_RECOUCHE_MINUTES,
            turndown_minutes: DEFAULT_TURNDOWN_MINUTES,
            turndown_window: None,
        }
    }
}

/// A shift's clock boundaries: working hours and the meal break inside them.
///
/// Used by [`PeriodConfig::from_shift_hours`] to derive period lengths the
/// same way a shift-template setup would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHours {
    /// Shift start (minutes from midnight).
    pub start_minute: i64,
    /// Shift end (minutes from midnight).
    pub end_minute: i64,
    /// Meal break start (minutes from midnight).
    pub break_start_minute: i64,
    /// Meal break end (minutes from midnight).
    pub break_end_minute: i64,
}

impl ShiftHours {
    /// Creates shift hours from minutes-from-midnight boundaries.
    pub fn new(
        start_minute: i64,
        end_minute: i64,
        break_start_minute: i64,
        break_end_minute: i64,
    ) -> Self {
        Self {
            start_minute,
            end_minute,
            break_start_minute,
            break_end_minute,
        }
    }
}

/// Lengths of the ordered work periods (min).
///
/// - **P1** — morning only; capacity scales with day-shift pairs.
/// - **P2** — overlap; capacity scales with day + evening pairs.
/// - **P3** — evening finish; capacity scales with evening pairs.
/// - **Turndown** — evening; capacity scales with evening headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    /// Morning-only period length (min).
    pub p1_minutes: i64,
    /// Overlap period length (min).
    pub p2_minutes: i64,
    /// Evening finishing period length (min).
    pub p3_minutes: i64,
    /// Turndown period length (min). Overridden by a configured
    /// turndown window on [`TaskCosts`].
    pub turndown_period_minutes: i64,
}

impl PeriodConfig {
    /// Derives period lengths from the two shifts' clock boundaries.
    ///
    /// P1 runs from day-shift start to its break; P2 is the overlap of the
    /// day shift after its break with the evening shift before its break;
    /// P3 runs from day-shift end to the evening break; turndown fills the
    /// evening shift after its break. Degenerate shift layouts can yield a
    /// non-positive period here and are rejected by engine construction.
    pub fn from_shift_hours(day: &ShiftHours, evening: &ShiftHours) -> Self {
        let p2_start = day.break_end_minute.max(evening.start_minute);
        let p2_end = day.end_minute.min(evening.break_start_minute);
        Self {
            p1_minutes: day.break_start_minute - day.start_minute,
            p2_minutes: p2_end - p2_start,
            p3_minutes: evening.break_start_minute - day.end_minute,
            turndown_period_minutes: evening.end_minute - evening.break_end_minute,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("p1_minutes", self.p1_minutes),
            ("p2_minutes", self.p2_minutes),
            ("p3_minutes", self.p3_minutes),
            ("turndown_period_minutes", self.turndown_period_minutes),
        ];
        for (period, value) in periods {
            if value <= 0 {
                return Err(ConfigError::NonPositivePeriod { period, value });
            }
        }
        Ok(())
    }
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            p1_minutes: DEFAULT_P1_MINUTES,
            p2_minutes: DEFAULT_P2_MINUTES,
            p3_minutes: DEFAULT_P3_MINUTES,
            turndown_period_minutes: DEFAULT_TURNDOWN_PERIOD_MINUTES,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Per-room service durations.
    pub task_costs: TaskCosts,
    /// Period lengths.
    pub periods: PeriodConfig,
    /// Extra minutes each evening worker may absorb beyond nominal
    /// turndown capacity. `None` = no elasticity mechanism.
    pub elasticity_minutes_per_person: Option<i64>,
}

impl EngineConfig {
    /// Sets the task costs.
    pub fn with_task_costs(mut self, task_costs: TaskCosts) -> Self {
        self.task_costs = task_costs;
        self
    }

    /// Sets the period lengths.
    pub fn with_periods(mut self, periods: PeriodConfig) -> Self {
        self.periods = periods;
        self
    }

    /// Sets the per-person elasticity allowance (min).
    pub fn with_elasticity(mut self, minutes_per_person: i64) -> Self {
        self.elasticity_minutes_per_person = Some(minutes_per_person);
        self
    }

    /// Effective turndown period length (min): the configured turndown
    /// window's duration when present, else the flat period length.
    pub fn turndown_period_minutes(&self) -> i64 {
        self.task_costs
            .turndown_window
            .map(|w| w.duration_minutes())
            .unwrap_or(self.periods.turndown_period_minutes)
    }

    /// Validates all durations and period lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.task_costs.validate()?;
        self.periods.validate()?;
        if let Some(allowance) = self.elasticity_minutes_per_person {
            if allowance <= 0 {
                return Err(ConfigError::NonPositiveElasticity(allowance));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.task_costs.depart_minutes, 50);
        assert_eq!(config.task_costs.recouche_minutes, 20);
        assert_eq!(config.task_costs.turndown_minutes, 20);
        assert_eq!(config.periods.p1_minutes, 210);
        assert_eq!(config.periods.p2_minutes, 210);
        assert_eq!(config.periods.p3_minutes, 90);
        assert_eq!(config.turndown_period_minutes(), 210);
        assert_eq!(config.elasticity_minutes_per_person, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = EngineConfig::default()
            .with_task_costs(TaskCosts::default().with_recouche_minutes(0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration {
                field: "recouche_minutes",
                value: 0,
            })
        );
    }

    #[test]
    fn test_negative_period_rejected() {
        let mut config = EngineConfig::default();
        config.periods.p3_minutes = -30;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositivePeriod {
                period: "p3_minutes",
                value: -30,
            })
        );
    }

    #[test]
    fn test_zero_elasticity_rejected() {
        let config = EngineConfig::default().with_elasticity(0);
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveElasticity(0)));
    }

    #[test]
    fn test_turndown_window_overrides_period_length() {
        // 19:00 - 22:00 = 180 min
        let costs = TaskCosts::default().with_turndown_window(TimeWindow::new(19 * 60, 22 * 60));
        let config = EngineConfig::default().with_task_costs(costs);
        assert!(config.validate().is_ok());
        assert_eq!(config.turndown_period_minutes(), 180);
    }

    #[test]
    fn test_empty_turndown_window_rejected() {
        let costs = TaskCosts::default().with_turndown_window(TimeWindow::new(1200, 1200));
        let config = EngineConfig::default().with_task_costs(costs);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyTurndownWindow {
                start_minute: 1200,
                end_minute: 1200,
            })
        );
    }

    #[test]
    fn test_from_shift_hours() {
        // Day 09:00-17:30, break 12:30-13:30. Evening 13:30-22:00, break 18:30-19:00.
        let day = ShiftHours::new(9 * 60, 17 * 60 + 30, 12 * 60 + 30, 13 * 60 + 30);
        let evening = ShiftHours::new(13 * 60 + 30, 22 * 60, 18 * 60 + 30, 19 * 60);
        let periods = PeriodConfig::from_shift_hours(&day, &evening);

        assert_eq!(periods.p1_minutes, 210); // 09:00 - 12:30
        assert_eq!(periods.p2_minutes, 240); // 13:30 - 17:30
        assert_eq!(periods.p3_minutes, 60); // 17:30 - 18:30
        assert_eq!(periods.turndown_period_minutes, 180); // 19:00 - 22:00
        assert!(periods.validate().is_ok());
    }

    #[test]
    fn test_from_shift_hours_degenerate_rejected() {
        // Day shift ends after the evening break starts → P3 <= 0.
        let day = ShiftHours::new(9 * 60, 19 * 60, 12 * 60 + 30, 13 * 60 + 30);
        let evening = ShiftHours::new(13 * 60 + 30, 22 * 60, 18 * 60 + 30, 19 * 60);
        let periods = PeriodConfig::from_shift_hours(&day, &evening);
        assert!(periods.validate().is_err());
    }

    #[test]
    fn test_time_window_duration() {
        let w = TimeWindow::new(19 * 60, 22 * 60);
        assert_eq!(w.duration_minutes(), 180);
    }
}
