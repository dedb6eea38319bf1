//! Liveness probe

/// Fixed body of `GET /health`
pub const HEALTHY: &str = "Healthy";

/// GET /health - Liveness probe
pub async fn health_check() -> &'static str {
    HEALTHY
}
