//! Unified error types for litchi-html.
//!
//! This module provides a single error type shared by markup construction,
//! style resolution, conversion and the OOXML part readers.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
