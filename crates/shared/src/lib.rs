//! Shared types, errors, and configuration for Tabsplit.
//!
//! This crate provides common types used across all other crates:
//! - Monetary rounding and tolerance helpers with decimal precision
//! - Typed IDs for type-safe references to remote-ledger entities
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
