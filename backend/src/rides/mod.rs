//! Rides module
//!
//! The ride entity and the rules a create request must satisfy before it is stored.

pub mod model;
pub mod validation;

pub use model::{CreateRideRequest, NewRide, Ride};
pub use validation::validate_create_ride;
