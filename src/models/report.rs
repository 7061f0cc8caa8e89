//! Distribution report: the engine's per-day output.
//!
//! Built once per call and immutable afterwards. Intended to be serialized
//! (e.g. to JSON) for a display layer; every reported quantity — per-period
//! rooms done by kind, turndown coverage and mechanism, balance hours — is
//! part of the contract, not just the totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DayForecast;

/// Identifies one of the three sequential cleaning periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    /// P1 — day shift works alone.
    MorningAlone,
    /// P2 — day and evening shifts overlap.
    Overlap,
    /// P3 — evening shift finishes alone.
    EveningFinish,
}

impl PeriodKind {
    /// Stable label for serialized consumers.
    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::MorningAlone => "morning_alone",
            PeriodKind::Overlap => "morning_evening",
            PeriodKind::EveningFinish => "evening_finishes",
        }
    }
}

/// Outcome of one cleaning period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Which period this is.
    pub kind: PeriodKind,
    /// Worker pairs active in this period.
    pub pairs: i32,
    /// Unpaired workers present (no capacity contribution).
    pub solos: i32,
    /// Pair capacity for this period (min).
    pub capacity_minutes: i64,
    /// Departure cleans completed.
    pub departs_done: i32,
    /// Recouches completed.
    pub recouches_done: i32,
    /// Minutes actually consumed.
    pub minutes_used: i64,
    /// Capacity left unused (min).
    pub spare_minutes: i64,
    /// Departure cleans still pending after this period.
    pub departs_left: i32,
    /// Recouches still pending after this period.
    pub recouches_left: i32,
}

impl PeriodResult {
    /// Rooms completed this period, both kinds.
    #[inline]
    pub fn rooms_done(&self) -> i32 {
        self.departs_done + self.recouches_done
    }

    /// Backlog remaining after this period.
    #[inline]
    pub fn backlog(&self) -> i32 {
        self.departs_left + self.recouches_left
    }
}

/// How the turndown requirement is (or is not) covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurndownCoverage {
    /// Nominal capacity covers the requirement.
    Covered {
        /// Capacity left over (min).
        spare_minutes: i64,
    },
    /// The shortfall fits inside the per-person elasticity allowance.
    Elastic {
        /// Extra minutes each evening worker absorbs, rounded up to a
        /// quarter-hour step and capped at the allowance.
        extra_minutes_per_person: i64,
    },
    /// Hard staffing deficit: more people are needed.
    Short {
        /// Uncovered work (min).
        deficit_minutes: i64,
        /// Additional evening workers required.
        extra_persons_needed: i32,
    },
}

/// Outcome of the evening turndown computation.
///
/// Turndown is per-person, not per-pair, and independent of the cleaning
/// periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurndownResult {
    /// Rooms requiring turndown (= occupied).
    pub rooms: i32,
    /// Work required (min).
    pub required_minutes: i64,
    /// Nominal capacity (min).
    pub capacity_minutes: i64,
    /// Turndown period length used (min).
    pub period_minutes: i64,
    /// Evening workers assigned.
    pub persons_assigned: i32,
    /// Coverage outcome.
    pub coverage: TurndownCoverage,
}

impl TurndownResult {
    /// Whether the requirement is met, directly or via elasticity.
    pub fn is_covered(&self) -> bool {
        !matches!(self.coverage, TurndownCoverage::Short { .. })
    }

    /// Additional workers needed; zero unless coverage is short.
    pub fn extra_persons_needed(&self) -> i32 {
        match self.coverage {
            TurndownCoverage::Short {
                extra_persons_needed,
                ..
            } => extra_persons_needed,
            _ => 0,
        }
    }
}

/// Net hours balance for the day.
///
/// Reporting only — not a constraint. The balance can show a deficit while
/// no period reported missing rooms (work fit, but with no margin) and
/// positive spare while rooms were still missed (timing, not total
/// capacity, was the bottleneck).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Scheduled shift hours (external pass-through).
    pub assigned_hours: f64,
    /// Hours of work consumed: cleaning minutes used plus turndown
    /// requirement.
    pub needed_hours: f64,
    /// `assigned - needed`; negative means deficit.
    pub spare_hours: f64,
    /// Whether `spare_hours` is negative.
    pub has_deficit: bool,
}

/// Complete per-day distribution report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// Day this report describes.
    pub date: NaiveDate,
    /// Input forecast, echoed for consumers.
    pub forecast: DayForecast,
    /// Derived mid-stay services.
    pub stays: i32,
    /// Departures plus stays.
    pub total_rooms: i32,
    /// The three cleaning periods, in order P1, P2, P3.
    pub periods: Vec<PeriodResult>,
    /// Evening turndown outcome.
    pub turndown: TurndownResult,
    /// Hours balance.
    pub balance: Balance,
    /// Rooms that will not be serviced today (backlog after P3).
    pub rooms_deficit: i32,
}

impl DistributionReport {
    /// Whether any room goes unserviced today.
    pub fn has_rooms_deficit(&self) -> bool {
        self.rooms_deficit > 0
    }

    /// Departure cleans completed across all periods.
    pub fn departs_done_total(&self) -> i32 {
        self.periods.iter().map(|p| p.departs_done).sum()
    }

    /// Recouches completed across all periods.
    pub fn recouches_done_total(&self) -> i32 {
        self.periods.iter().map(|p| p.recouches_done).sum()
    }

    /// The result for a given period, if present.
    pub fn period(&self, kind: PeriodKind) -> Option<&PeriodResult> {
        self.periods.iter().find(|p| p.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_period(kind: PeriodKind, departs: i32, recouches: i32) -> PeriodResult {
        PeriodResult {
            kind,
            pairs: 2,
            solos: 0,
            capacity_minutes: 420,
            departs_done: departs,
            recouches_done: recouches,
            minutes_used: 0,
            spare_minutes: 0,
            departs_left: 0,
            recouches_left: 0,
        }
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(PeriodKind::MorningAlone.label(), "morning_alone");
        assert_eq!(PeriodKind::Overlap.label(), "morning_evening");
        assert_eq!(PeriodKind::EveningFinish.label(), "evening_finishes");
    }

    #[test]
    fn test_period_result_totals() {
        let p = sample_period(PeriodKind::MorningAlone, 8, 1);
        assert_eq!(p.rooms_done(), 9);
        assert_eq!(p.backlog(), 0);
    }

    #[test]
    fn test_turndown_coverage_accessors() {
        let covered = TurndownResult {
            rooms: 40,
            required_minutes: 800,
            capacity_minutes: 840,
            period_minutes: 210,
            persons_assigned: 4,
            coverage: TurndownCoverage::Covered { spare_minutes: 40 },
        };
        assert!(covered.is_covered());
        assert_eq!(covered.extra_persons_needed(), 0);

        let short = TurndownResult {
            coverage: TurndownCoverage::Short {
                deficit_minutes: 780,
                extra_persons_needed: 4,
            },
            ..covered
        };
        assert!(!short.is_covered());
        assert_eq!(short.extra_persons_needed(), 4);
    }

    #[test]
    fn test_report_lookup_and_totals() {
        let report = DistributionReport {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            forecast: DayForecast::new(10, 5, 40),
            stays: 35,
            total_rooms: 45,
            periods: vec![
                sample_period(PeriodKind::MorningAlone, 8, 1),
                sample_period(PeriodKind::Overlap, 2, 34),
                sample_period(PeriodKind::EveningFinish, 0, 0),
            ],
            turndown: TurndownResult {
                rooms: 40,
                required_minutes: 800,
                capacity_minutes: 840,
                period_minutes: 210,
                persons_assigned: 4,
                coverage: TurndownCoverage::Covered { spare_minutes: 40 },
            },
            balance: Balance {
                assigned_hours: 64.0,
                needed_hours: 33.3,
                spare_hours: 30.7,
                has_deficit: false,
            },
            rooms_deficit: 0,
        };

        assert_eq!(report.departs_done_total(), 10);
        assert_eq!(report.recouches_done_total(), 35);
        assert!(!report.has_rooms_deficit());
        assert_eq!(
            report.period(PeriodKind::Overlap).unwrap().recouches_done,
            34
        );
    }
}
