//! Domain models.
//!
//! Inputs (`DayForecast`, `StaffCounts`, `DayInput`) and the report types
//! produced by the engine (`DistributionReport` and its parts). The whole
//! model is constructed fresh per day and discarded after consumption;
//! nothing persists or mutates across calls.

mod forecast;
mod report;
mod staffing;

pub use forecast::DayForecast;
pub use report::{
    Balance, DistributionReport, PeriodKind, PeriodResult, TurndownCoverage, TurndownResult,
};
pub use staffing::{DayInput, StaffCounts};
