//! Shared types for the inventory analytics engine
//!
//! Common types used across crates: catalog and stock history models,
//! analytics result structures, and the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
