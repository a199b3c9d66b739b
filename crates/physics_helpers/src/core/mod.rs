//! # Core Module
//!
//! Shared configuration for the query helpers.
//!
//! ## Organization
//!
//! - **Config**: query settings, file loading and configuration errors

pub mod config;

pub use config::{Config, ConfigError, QueryConfig};
