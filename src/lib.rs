//! Daily workload distribution for hotel housekeeping.
//!
//! Given a day's guest-turnover forecast and the headcount on each of two
//! shifts, predicts how many rooms get cleaned in each fixed work period,
//! where backlog accumulates, whether evening turndown service is covered
//! (directly or through an elasticity allowance), and what the net hours
//! balance for the day looks like.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DayForecast`, `StaffCounts`, `DayInput`,
//!   and the `DistributionReport` family
//! - **`config`**: Task durations, period lengths, and their defaults
//! - **`engine`**: The distribution computation (`DistributionEngine`)
//! - **`validation`**: Input integrity checks (negative counts)
//! - **`error`**: `InputError` and `ConfigError`
//!
//! # Model
//!
//! Rooms are serviced by worker *pairs* across three sequential periods:
//! morning alone, morning+evening overlap, evening finish. Departure cleans
//! take priority over mid-stay services ("recouches"); unfinished rooms
//! carry forward and anything left after the last period is a reported
//! deficit, never an error. Turndown runs in its own evening window with
//! per-person (not per-pair) capacity.
//!
//! The engine is a pure function of its inputs: no state, no I/O, one
//! immutable report per `(date, forecast, staffing)` triple. Invocations
//! are independent and freely parallelizable across dates.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod validation;
