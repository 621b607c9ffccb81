//! Item Model

use serde::{Deserialize, Serialize};

/// Inventory item entity
///
/// Owned by the catalog; the analytics engine reads it read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Unit label for display ("kg", "bags", "liters")
    pub unit: String,
    /// Quantity at or below which the item counts as low stock
    pub restock_threshold: f64,
    /// Currency per unit; absent when the supplier price is unknown
    pub cost_per_unit: Option<f64>,
    /// Category reference
    pub category_id: Option<i64>,
    pub is_active: bool,
}

impl Item {
    /// Whether the given quantity puts this item at or below its threshold
    pub fn is_low_stock(&self, quantity: f64) -> bool {
        quantity <= self.restock_threshold
    }
}
