//! Evening turndown coverage.
//!
//! Turndown is computed independently of the cleaning periods: capacity
//! scales with evening headcount (each worker services rooms alone), not
//! pairs. A shortfall is first checked against the configured per-person
//! elasticity allowance; only when that cannot absorb it does the result
//! become a hard staffing deficit.

use crate::models::{TurndownCoverage, TurndownResult};

/// Ceiling division for positive divisors.
fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

/// Rounds minutes up to the next quarter-hour step.
fn round_up_quarter_hour(minutes: i64) -> i64 {
    if minutes <= 0 {
        return 0;
    }
    ceil_div(minutes, 15) * 15
}

/// Computes turndown coverage for the day.
///
/// `period_minutes` must be positive (guaranteed by config validation).
pub(super) fn compute(
    occupied: i32,
    evening_count: i32,
    turndown_minutes: i64,
    period_minutes: i64,
    elasticity_per_person: Option<i64>,
) -> TurndownResult {
    let required = i64::from(occupied) * turndown_minutes;
    let capacity = i64::from(evening_count) * period_minutes;

    let coverage = if capacity >= required {
        TurndownCoverage::Covered {
            spare_minutes: capacity - required,
        }
    } else {
        let deficit = required - capacity;
        let elastic_total = elasticity_per_person
            .map(|per_person| i64::from(evening_count) * per_person)
            .unwrap_or(0);

        if elastic_total >= deficit && evening_count > 0 {
            // Safe: evening_count > 0 here.
            let per_person = ceil_div(deficit, i64::from(evening_count));
            let allowance = elasticity_per_person.unwrap_or(0);
            TurndownCoverage::Elastic {
                extra_minutes_per_person: round_up_quarter_hour(per_person).min(allowance),
            }
        } else {
            TurndownCoverage::Short {
                deficit_minutes: deficit,
                extra_persons_needed: ceil_div(deficit, period_minutes) as i32,
            }
        }
    };

    TurndownResult {
        rooms: occupied,
        required_minutes: required,
        capacity_minutes: capacity,
        period_minutes,
        persons_assigned: evening_count,
        coverage,
    }
}
