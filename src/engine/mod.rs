//! Workload distribution engine.
//!
//! - **`distribution`**: the sequential greedy pass over the cleaning
//!   periods and report assembly
//! - **`turndown`**: evening turndown coverage (internal)
//! - **`balance`**: daily hours balance (internal)

mod balance;
mod distribution;
mod turndown;

pub use distribution::DistributionEngine;
