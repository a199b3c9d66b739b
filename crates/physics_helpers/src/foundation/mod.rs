//! Foundation module - Core utilities and types
//!
//! This module provides the engine-independent building blocks:
//! - Vector types and direction helpers
//! - Range checks, comparators and negation
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod numeric;
