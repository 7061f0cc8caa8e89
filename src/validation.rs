//! Input validation.
//!
//! Rejects a day's input before any capacity math runs. A negative guest
//! or staff count indicates an upstream data defect that must not be
//! masked, so validation fails on the first violation instead of clamping.
//! Zero values are legitimate inputs everywhere (an empty house, an
//! unstaffed shift) and pass.

use crate::error::InputError;
use crate::models::{DayForecast, DayInput, StaffCounts};

/// Validates a forecast: all counts must be non-negative.
pub fn validate_forecast(forecast: &DayForecast) -> Result<(), InputError> {
    let fields = [
        ("departures", forecast.departures),
        ("arrivals", forecast.arrivals),
        ("occupied", forecast.occupied),
    ];
    for (field, value) in fields {
        if value < 0 {
            return Err(InputError::NegativeForecast { field, value });
        }
    }
    Ok(())
}

/// Validates staff counts: both shifts must be non-negative.
pub fn validate_staff(staff: &StaffCounts) -> Result<(), InputError> {
    if staff.day < 0 {
        return Err(InputError::NegativeStaffCount {
            shift: "day",
            value: staff.day,
        });
    }
    if staff.evening < 0 {
        return Err(InputError::NegativeStaffCount {
            shift: "evening",
            value: staff.evening,
        });
    }
    Ok(())
}

/// Validates a complete day input.
pub fn validate_input(input: &DayInput) -> Result<(), InputError> {
    validate_forecast(&input.forecast)?;
    validate_staff(&input.staff)?;
    if input.assigned_hours < 0.0 {
        return Err(InputError::NegativeAssignedHours(input.assigned_hours));
    }
    Ok(())
}
