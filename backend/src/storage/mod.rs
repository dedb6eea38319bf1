//! Ride storage
//!
//! The `RideStore` trait is the only way the HTTP layer touches persisted
//! rides. Handlers hold it as `Arc<dyn RideStore>`, so tests can swap in
//! doubles and production uses [`SqliteRideStore`].

pub mod sqlite;

pub use sqlite::SqliteRideStore;

use crate::rides::{NewRide, Ride};
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a ride store
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database location could not be prepared (e.g. parent directory creation)
    #[error("Failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    /// Connecting to the database failed
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A schema migration statement failed
    #[error("Migration failed: {source} - Statement: {statement}")]
    Migration {
        /// Leading part of the failing statement
        statement: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// A query or insert failed
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// Storage handle for the `Rides` table
#[async_trait]
pub trait RideStore: Send + Sync {
    /// Persist a validated ride and return the id assigned by storage
    async fn insert(&self, ride: &NewRide) -> Result<i64, StorageError>;

    /// All rows whose `rideID` equals `ride_id`
    async fn find_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, StorageError>;

    /// Up to `limit` rows starting at `offset`, in insertion order
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Ride>, StorageError>;
}
