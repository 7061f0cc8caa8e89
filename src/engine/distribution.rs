//! Sequential greedy distribution over the cleaning periods.
//!
//! # Algorithm
//!
//! 1. Derive the day's workload: departure cleans plus mid-stay services
//!    (`stays = max(0, occupied - arrivals)`).
//! 2. For P1, P2, P3 in order: capacity = active pairs × period minutes;
//!    complete departure cleans first, then let leftover minutes flow into
//!    recouches within the same period. Backlog carries forward only.
//! 3. Backlog left after P3 is the day's rooms deficit — reported, never
//!    dropped.
//! 4. Turndown and the hours balance are computed alongside (see the
//!    sibling modules).
//!
//! All capacity math is integer floor division; rooms complete whole or
//! not at all.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{ConfigError, InputError};
use crate::models::{DayInput, DistributionReport, PeriodKind, PeriodResult};
use crate::validation::validate_input;

use super::{balance, turndown};

/// Daily workload distribution engine.
///
/// Pure and stateless: holds only validated configuration, and each
/// `distribute` call is independent.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hk_workload::engine::DistributionEngine;
/// use hk_workload::models::{DayForecast, DayInput, StaffCounts};
///
/// let engine = DistributionEngine::default();
/// let input = DayInput::new(
///     NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     DayForecast::new(10, 5, 40),
///     StaffCounts::new(4, 4),
/// )
/// .with_assigned_hours(64.0);
///
/// let report = engine.distribute(&input).unwrap();
/// assert_eq!(report.stays, 35);
/// assert_eq!(report.periods[0].departs_done, 8);
/// assert!(!report.has_rooms_deficit());
/// ```
#[derive(Debug, Clone)]
pub struct DistributionEngine {
    config: EngineConfig,
}

impl DistributionEngine {
    /// Creates an engine, validating the configuration.
    ///
    /// Zero or negative durations are a setup mistake and fail here, not
    /// on a given day's computation.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Distributes one day's workload across the periods.
    ///
    /// Rejects negative forecast or staffing values; an understaffed day
    /// is not an error and comes back as a report with deficits.
    pub fn distribute(&self, input: &DayInput) -> Result<DistributionReport, InputError> {
        validate_input(input)?;

        let forecast = input.forecast;
        let staff = input.staff;
        let stays = forecast.stays();
        let costs = &self.config.task_costs;

        debug!(
            date = %input.date,
            departures = forecast.departures,
            stays,
            occupied = forecast.occupied,
            day_staff = staff.day,
            evening_staff = staff.evening,
            "distributing daily workload"
        );

        let mut departs_left = forecast.departures;
        let mut recouches_left = stays;

        let periods_spec = [
            (
                PeriodKind::MorningAlone,
                staff.day_pairs(),
                staff.day_solo(),
                self.config.periods.p1_minutes,
            ),
            (
                PeriodKind::Overlap,
                staff.day_pairs() + staff.evening_pairs(),
                staff.day_solo() + staff.evening_solo(),
                self.config.periods.p2_minutes,
            ),
            (
                PeriodKind::EveningFinish,
                staff.evening_pairs(),
                staff.evening_solo(),
                self.config.periods.p3_minutes,
            ),
        ];

        let mut periods = Vec::with_capacity(periods_spec.len());
        let mut cleaning_minutes_used = 0;

        for (kind, pairs, solos, period_minutes) in periods_spec {
            let result = run_period(
                kind,
                pairs,
                solos,
                period_minutes,
                costs.depart_minutes,
                costs.recouche_minutes,
                &mut departs_left,
                &mut recouches_left,
            );
            cleaning_minutes_used += result.minutes_used;
            periods.push(result);
        }

        let rooms_deficit = departs_left + recouches_left;
        if rooms_deficit > 0 {
            debug!(date = %input.date, rooms_deficit, "rooms left unserviced after last period");
        }

        let turndown = turndown::compute(
            forecast.occupied,
            staff.evening,
            costs.turndown_minutes,
            self.config.turndown_period_minutes(),
            self.config.elasticity_minutes_per_person,
        );

        let balance = balance::compute(
            input.assigned_hours,
            cleaning_minutes_used,
            turndown.required_minutes,
        );

        Ok(DistributionReport {
            date: input.date,
            forecast,
            stays,
            total_rooms: forecast.total_rooms(),
            periods,
            turndown,
            balance,
            rooms_deficit,
        })
    }
}

impl Default for DistributionEngine {
    /// An engine with the documented default configuration.
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

/// Runs one period: departures first, leftover minutes flow into
/// recouches. Decrements the shared backlog counters.
#[allow(clippy::too_many_arguments)]
fn run_period(
    kind: PeriodKind,
    pairs: i32,
    solos: i32,
    period_minutes: i64,
    depart_minutes: i64,
    recouche_minutes: i64,
    departs_left: &mut i32,
    recouches_left: &mut i32,
) -> PeriodResult {
    let capacity = i64::from(pairs) * period_minutes;

    let departs_done = i64::from(*departs_left).min(capacity / depart_minutes) as i32;
    let mut minutes_used = i64::from(departs_done) * depart_minutes;

    let remaining = capacity - minutes_used;
    let recouches_done = i64::from(*recouches_left).min(remaining / recouche_minutes) as i32;
    minutes_used += i64::from(recouches_done) * recouche_minutes;

    *departs_left -= departs_done;
    *recouches_left -= recouches_done;

    PeriodResult {
        kind,
        pairs,
        solos,
        capacity_minutes: capacity,
        departs_done,
        recouches_done,
        minutes_used,
        spare_minutes: capacity - minutes_used,
        departs_left: *departs_left,
        recouches_left: *recouches_left,
    }
}
