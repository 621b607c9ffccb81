//! Stock history models
//!
//! Append-only records produced by staff data entry: point-in-time
//! physical counts and logged replenishments. The analytics engine
//! only ever reads these.

use serde::{Deserialize, Serialize};

/// A manual physical count of an item at a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockReading {
    pub item_id: i64,
    /// When the count was taken (Unix millis)
    pub timestamp: i64,
    /// Counted quantity; non-negative, one decimal place
    pub quantity: f64,
    pub staff_name: Option<String>,
    pub notes: Option<String>,
}

impl StockReading {
    pub fn new(item_id: i64, timestamp: i64, quantity: f64) -> Self {
        Self {
            item_id,
            timestamp,
            quantity,
            staff_name: None,
            notes: None,
        }
    }
}

/// A logged replenishment of an item's quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestockEvent {
    pub item_id: i64,
    /// When the restock happened (Unix millis)
    pub timestamp: i64,
    /// Quantity added; strictly positive
    pub amount_added: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

impl RestockEvent {
    pub fn new(item_id: i64, timestamp: i64, amount_added: f64) -> Self {
        Self {
            item_id,
            timestamp,
            amount_added,
            supplier: None,
            notes: None,
        }
    }
}
