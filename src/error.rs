//! Error types.
//!
//! Two kinds only: invalid day input (negative counts) and invalid
//! configuration (non-positive durations). Both are synchronous outcomes
//! of a pure computation — nothing is transient, nothing is retried, and
//! no bad value is silently replaced with a default. A detected deficit
//! (rooms or turndown) is *not* an error; it is a reportable result of an
//! understaffed day.

use thiserror::Error;

/// A day's input data was rejected.
///
/// Negative guest or staff counts indicate an upstream data defect and
/// must not be masked by clamping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("negative forecast value: {field} = {value}")]
    NegativeForecast { field: &'static str, value: i32 },

    #[error("negative staff count: {shift} shift = {value}")]
    NegativeStaffCount { shift: &'static str, value: i32 },

    #[error("negative assigned hours: {0}")]
    NegativeAssignedHours(f64),
}

/// An engine configuration was rejected at construction.
///
/// A zero task duration would produce unbounded throughput, so it is
/// treated as a setup mistake rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("task duration must be positive: {field} = {value} min")]
    NonPositiveDuration { field: &'static str, value: i64 },

    #[error("period length must be positive: {period} = {value} min")]
    NonPositivePeriod { period: &'static str, value: i64 },

    #[error("elasticity allowance must be positive: {0} min/person")]
    NonPositiveElasticity(i64),

    #[error("turndown window is empty: {start_minute}..{end_minute} min from midnight")]
    EmptyTurndownWindow { start_minute: i64, end_minute: i64 },
}
