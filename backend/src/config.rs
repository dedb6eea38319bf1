//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Pagination rules for `GET /rides`
    pub pagination: PaginationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite URL or file path of the rides database
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Pagination configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the request omits `perpage`
    pub default_per_page: i64,
    /// Largest accepted `perpage`
    pub max_per_page: i64,
    /// Skip one row on the first page, as older clients of this API expect
    pub legacy_first_page_offset: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 100,
            legacy_first_page_offset: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let pagination_defaults = PaginationConfig::default();

        Self {
            server: ServerConfig {
                port: parse_var("PORT").unwrap_or(8010),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:data/rides.db".to_string()),
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
            pagination: PaginationConfig {
                default_per_page: parse_var("RIDES_DEFAULT_PER_PAGE")
                    .filter(|n| *n > 0)
                    .unwrap_or(pagination_defaults.default_per_page),
                max_per_page: parse_var("RIDES_MAX_PER_PAGE")
                    .filter(|n| *n > 0)
                    .unwrap_or(pagination_defaults.max_per_page),
                legacy_first_page_offset: env::var("RIDES_LEGACY_FIRST_PAGE_OFFSET")
                    .map(|v| parse_flag(&v))
                    .unwrap_or(pagination_defaults.legacy_first_page_offset),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "HOST",
        "PORT",
        "DATABASE_URL",
        "DB_MAX_CONNECTIONS",
        "RIDES_DEFAULT_PER_PAGE",
        "RIDES_MAX_PER_PAGE",
        "RIDES_LEGACY_FIRST_PAGE_OFFSET",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server_addr(), "0.0.0.0:8010");
        assert_eq!(config.database.url, "sqlite:data/rides.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.pagination, PaginationConfig::default());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("HOST", "127.0.0.1");
        env::set_var("PORT", "9000");
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("RIDES_DEFAULT_PER_PAGE", "25");
        env::set_var("RIDES_LEGACY_FIRST_PAGE_OFFSET", "TRUE");

        let config = Config::from_env();
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.pagination.default_per_page, 25);
        assert!(config.pagination.legacy_first_page_offset);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back_to_defaults() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("DB_MAX_CONNECTIONS", "0");
        env::set_var("RIDES_MAX_PER_PAGE", "-3");

        let config = Config::from_env();
        assert_eq!(config.server.port, 8010);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.pagination.max_per_page, 100);
        clear_env();
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
