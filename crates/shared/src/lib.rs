//! Shared types, errors, and configuration for the cash-flow dashboard core.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency types with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
