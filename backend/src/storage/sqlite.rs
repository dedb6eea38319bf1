//! SQLite ride store
//!
//! Handles all database interactions for rides.

use super::{RideStore, StorageError};
use crate::rides::{NewRide, Ride};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

const MIGRATION_SQL: &str = include_str!("../../migrations/001_create_rides.sql");

const SELECT_COLUMNS: &str =
    "rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle";

/// Database connection pool for ride operations
#[derive(Clone)]
pub struct SqliteRideStore {
    pool: SqlitePool,
}

impl SqliteRideStore {
    /// Initialize database connection pool and run migrations
    ///
    /// # Arguments
    /// * `db_url` - `sqlite:` URL or bare path to the database file.
    ///   `sqlite::memory:` gives an ephemeral single-connection store.
    /// * `max_connections` - Pool size for file-backed databases
    ///
    /// # Returns
    /// * `Ok(SqliteRideStore)` if successful
    /// * `Err(StorageError)` if connection or migration failed
    pub async fn connect(db_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let in_memory = is_memory_url(db_url);

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_url.starts_with("sqlite:") {
            db_url.to_string()
        } else {
            format!("sqlite:{}", db_url)
        };

        if !in_memory {
            if let Some(parent) = Path::new(file_path(&connection_string)).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(StorageError::Connect)?
            .create_if_missing(true);

        // Every connection to `:memory:` opens its own database, so keep exactly one alive.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(StorageError::Connect)?;

        info!("Connected to SQLite database at: {}", db_url);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StorageError> {
        info!("Running database migrations...");

        for statement in migration_statements(MIGRATION_SQL) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|source| StorageError::Migration {
                    statement: statement.chars().take(100).collect(),
                    source,
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the database pool (for advanced operations if needed)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RideStore for SqliteRideStore {
    async fn insert(&self, ride: &NewRide) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(ride.start_lat)
        .bind(ride.start_long)
        .bind(ride.end_lat)
        .bind(ride.end_long)
        .bind(&ride.rider_name)
        .bind(&ride.driver_name)
        .bind(&ride.driver_vehicle)
        .execute(&self.pool)
        .await?;

        let ride_id = result.last_insert_rowid();
        debug!("Inserted ride: {}", ride_id);
        Ok(ride_id)
    }

    async fn find_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, StorageError> {
        let rides = sqlx::query_as::<_, Ride>(&format!(
            "SELECT {SELECT_COLUMNS} FROM Rides WHERE rideID = ?"
        ))
        .bind(ride_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rides)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Ride>, StorageError> {
        let rides = sqlx::query_as::<_, Ride>(&format!(
            "SELECT {SELECT_COLUMNS} FROM Rides ORDER BY rideID LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rides)
    }
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Filesystem path part of a `sqlite:` connection string
fn file_path(connection_string: &str) -> &str {
    let path = connection_string
        .strip_prefix("sqlite://")
        .or_else(|| connection_string.strip_prefix("sqlite:"))
        .unwrap_or(connection_string);
    path.split('?').next().unwrap_or(path)
}

/// Split a migration script into executable statements.
///
/// Comment-only lines and trailing `--` comments are dropped; statements are
/// separated by `;`.
fn migration_statements(sql: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let without_comments = match trimmed.find("--") {
            Some(comment_pos) => &trimmed[..comment_pos],
            None => trimmed,
        };
        cleaned_sql.push_str(without_comments.trim());
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
