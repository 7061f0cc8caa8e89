//! Daily hours balance.
//!
//! Compares externally scheduled shift hours against the work the day
//! actually consumes. Purely informational: the distribution never reads
//! it back, and a deficit here is independent of a rooms deficit.

use crate::models::Balance;

/// Computes the balance from minutes consumed in the cleaning periods
/// plus the full turndown requirement.
pub(super) fn compute(
    assigned_hours: f64,
    cleaning_minutes_used: i64,
    turndown_required_minutes: i64,
) -> Balance {
    let needed_hours = (cleaning_minutes_used + turndown_required_minutes) as f64 / 60.0;
    let spare_hours = assigned_hours - needed_hours;
    Balance {
        assigned_hours,
        needed_hours,
        spare_hours,
        has_deficit: spare_hours < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spare_hours() {
        let b = compute(64.0, 1200, 800);
        assert!((b.needed_hours - 2000.0 / 60.0).abs() < 1e-10);
        assert!((b.spare_hours - (64.0 - 2000.0 / 60.0)).abs() < 1e-10);
        assert!(!b.has_deficit);
    }

    #[test]
    fn test_deficit_flag() {
        let b = compute(10.0, 600, 300);
        assert!((b.needed_hours - 15.0).abs() < 1e-10);
        assert!((b.spare_hours - (-5.0)).abs() < 1e-10);
        assert!(b.has_deficit);
    }

    #[test]
    fn test_no_work_spare_equals_assigned() {
        let b = compute(24.0, 0, 0);
        assert_eq!(b.needed_hours, 0.0);
        assert_eq!(b.spare_hours, 24.0);
        assert!(!b.has_deficit);
    }
}
