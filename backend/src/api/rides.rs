//! Ride API handlers
//!
//! Contains HTTP request handlers for creating, listing and fetching rides.

use crate::api::pagination::{ListRidesQuery, PageRequest};
use crate::api::SharedState;
use crate::error::AppError;
use crate::rides::{validate_create_ride, CreateRideRequest, Ride};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// One page of rides
#[derive(Debug, Serialize, Deserialize)]
pub struct RidesPage {
    /// Page number that was served
    pub page: i64,
    /// Page size that was applied
    pub perpage: i64,
    /// Rides on this page
    pub rows: Vec<Ride>,
}

/// POST /rides - Validate and store a new ride
pub async fn create_ride(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Ride>>), AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = CreateRideRequest::from_body(body)?;

    let new_ride = validate_create_ride(&request)?;

    let ride_id = state.store.insert(&new_ride).await?;
    let rides = state.store.find_by_id(ride_id).await?;
    if rides.is_empty() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "Ride {} not found after creation",
            ride_id
        )));
    }

    info!(ride_id, "Created ride");
    Ok((StatusCode::CREATED, Json(rides)))
}

/// GET /rides - List rides page by page
pub async fn list_rides(
    State(state): State<SharedState>,
    Query(query): Query<ListRidesQuery>,
) -> Result<Json<RidesPage>, AppError> {
    let page = PageRequest::from_query(&query, &state.pagination)?;

    let rows = state.store.list(page.per_page, page.offset).await?;
    if rows.is_empty() {
        return Err(AppError::RidesNotFound);
    }

    debug!(page = page.page, count = rows.len(), "Listed rides");
    Ok(Json(RidesPage {
        page: page.page,
        perpage: page.per_page,
        rows,
    }))
}

/// GET /rides/:id - Get a ride by its identifier
pub async fn get_ride(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Ride>>, AppError> {
    // A non-integer id can never equal a rideID.
    let ride_id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::RidesNotFound)?;

    let rides = state.store.find_by_id(ride_id).await?;
    if rides.is_empty() {
        return Err(AppError::RidesNotFound);
    }

    Ok(Json(rides))
}
