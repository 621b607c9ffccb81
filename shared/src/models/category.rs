//! Category Model

use serde::{Deserialize, Serialize};

/// Inventory category entity ("Dairy", "Coffee Beans", "Syrups")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
