//! Data models
//!
//! Shared between the analytics engine and its hosts (via API).
//! All IDs are `i64`; all timestamps are Unix milliseconds.

pub mod analytics;
pub mod category;
pub mod history;
pub mod item;

// Re-exports
pub use analytics::*;
pub use category::*;
pub use history::*;
pub use item::*;
