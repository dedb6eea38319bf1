//! Create-ride validation
//!
//! Checks run in a fixed order and the first failure wins:
//! start coordinates, end coordinates, rider name, driver name, driver vehicle.

use super::model::{CreateRideRequest, NewRide};
use crate::error::AppError;
use serde_json::Value;

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Rejection message for the pickup coordinates
pub const START_COORDINATES_MESSAGE: &str =
    "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively";

/// Rejection message for the drop-off coordinates
pub const END_COORDINATES_MESSAGE: &str =
    "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively";

/// Rejection message for the rider name
pub const RIDER_NAME_MESSAGE: &str = "Rider name must be a non empty string";

/// Rejection message for the driver name
pub const DRIVER_NAME_MESSAGE: &str = "Driver name must be a non empty string";

/// Rejection message for the driver vehicle
pub const DRIVER_VEHICLE_MESSAGE: &str = "Driver vehicle must be a non empty string";

/// Validate a create request and convert it into an insertable ride
///
/// # Returns
/// * `Ok(NewRide)` - All checks passed
/// * `Err(AppError::Validation)` - Message of the first failing check
pub fn validate_create_ride(request: &CreateRideRequest) -> Result<NewRide, AppError> {
    let (start_lat, start_long) =
        coordinates(&request.start_lat, &request.start_long, START_COORDINATES_MESSAGE)?;
    let (end_lat, end_long) =
        coordinates(&request.end_lat, &request.end_long, END_COORDINATES_MESSAGE)?;

    let rider_name = non_empty_string(&request.rider_name, RIDER_NAME_MESSAGE)?;
    let driver_name = non_empty_string(&request.driver_name, DRIVER_NAME_MESSAGE)?;
    let driver_vehicle = non_empty_string(&request.driver_vehicle, DRIVER_VEHICLE_MESSAGE)?;

    Ok(NewRide {
        start_lat,
        start_long,
        end_lat,
        end_long,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

fn coordinates(lat: &Value, long: &Value, message: &str) -> Result<(f64, f64), AppError> {
    let lat = coerce_number(lat).filter(|v| LATITUDE_RANGE.contains(v));
    let long = coerce_number(long).filter(|v| LONGITUDE_RANGE.contains(v));

    match (lat, long) {
        (Some(lat), Some(long)) => Ok((lat, long)),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// JSON numbers and numeric strings become finite `f64`; anything else is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

fn non_empty_string(value: &Value, message: &str) -> Result<String, AppError> {
    match value {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}
