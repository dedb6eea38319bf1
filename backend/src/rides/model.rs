//! Ride data models
//!
//! Defines the persisted ride row, the raw create request and the validated
//! insert payload.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Rejection message for a body that is valid JSON but not an object
pub const BODY_NOT_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

/// A persisted ride, serialized with the column names of the `Rides` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Ride {
    /// Identifier assigned by storage on insert
    #[serde(rename = "rideID")]
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    /// Pickup latitude
    pub start_lat: f64,
    /// Pickup longitude
    pub start_long: f64,
    /// Drop-off latitude
    pub end_lat: f64,
    /// Drop-off longitude
    pub end_long: f64,
    /// Rider name
    pub rider_name: String,
    /// Driver name
    pub driver_name: String,
    /// Driver's vehicle (e.g. "Toyota")
    pub driver_vehicle: String,
}

/// Body of `POST /rides` as sent by the client
///
/// Fields stay loosely typed so that wrong types surface as validation
/// errors instead of body rejections. Coordinates may be JSON numbers or
/// numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRideRequest {
    /// Pickup latitude
    #[serde(default)]
    pub start_lat: Value,
    /// Pickup longitude
    #[serde(default)]
    pub start_long: Value,
    /// Drop-off latitude
    #[serde(default)]
    pub end_lat: Value,
    /// Drop-off longitude
    #[serde(default)]
    pub end_long: Value,
    /// Rider name
    #[serde(default)]
    pub rider_name: Value,
    /// Driver name
    #[serde(default)]
    pub driver_name: Value,
    /// Driver's vehicle
    #[serde(default)]
    pub driver_vehicle: Value,
}

impl CreateRideRequest {
    /// Read a create request from a parsed JSON body
    ///
    /// Only objects are accepted; the derived `Deserialize` would also map a
    /// JSON array onto the fields by position.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        if !body.is_object() {
            return Err(AppError::Validation(BODY_NOT_OBJECT_MESSAGE.to_string()));
        }

        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
    }
}

/// A ride that passed validation and is ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    /// Pickup latitude in [-90, 90]
    pub start_lat: f64,
    /// Pickup longitude in [-180, 180]
    pub start_long: f64,
    /// Drop-off latitude in [-90, 90]
    pub end_lat: f64,
    /// Drop-off longitude in [-180, 180]
    pub end_long: f64,
    /// Non-empty rider name
    pub rider_name: String,
    /// Non-empty driver name
    pub driver_name: String,
    /// Non-empty vehicle name
    pub driver_vehicle: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ride_serializes_with_column_names() {
        let ride = Ride {
            ride_id: 1,
            start_lat: 40.7,
            start_long: -74.0,
            end_lat: 40.8,
            end_long: -73.9,
            rider_name: "Alice".to_string(),
            driver_name: "Bob".to_string(),
            driver_vehicle: "Civic".to_string(),
        };

        let value = serde_json::to_value(&ride).unwrap();
        assert_eq!(
            value,
            json!({
                "rideID": 1,
                "startLat": 40.7,
                "startLong": -74.0,
                "endLat": 40.8,
                "endLong": -73.9,
                "riderName": "Alice",
                "driverName": "Bob",
                "driverVehicle": "Civic"
            })
        );
    }

    #[test]
    fn test_from_body_requires_object() {
        let request = CreateRideRequest::from_body(json!({ "driver_name": "Bob" })).unwrap();
        assert_eq!(request.driver_name, json!("Bob"));

        let array = json!([40.7, -74, 40.8, -73.9, "Alice", "Bob", "Civic"]);
        match CreateRideRequest::from_body(array) {
            Err(AppError::Validation(message)) => assert_eq!(message, BODY_NOT_OBJECT_MESSAGE),
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_create_request_missing_fields_are_null() {
        let request: CreateRideRequest =
            serde_json::from_value(json!({ "rider_name": "Alice" })).unwrap();
        assert_eq!(request.rider_name, json!("Alice"));
        assert!(request.start_lat.is_null());
        assert!(request.driver_vehicle.is_null());
    }
}
