//! Ride Service Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
/// Ride entity and create-request validation
pub mod rides;
pub mod storage;
