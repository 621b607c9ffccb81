//! Analytics result models
//!
//! Derived per item, recomputed on demand, never persisted. Nullable
//! fields stay `Option` so serialized output preserves `null` vs `0`
//! (a `stock_life_days` of `null` means "no depletion observed", which
//! is not the same claim as "zero days left").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Directional classification of recent vs. older consumption rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

/// Menu decision for an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    #[default]
    Keep,
    Reduce,
    Remove,
}

/// Inferred usage between two consecutive stock readings, net of any
/// restocks logged strictly between them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumptionInterval {
    pub item_id: i64,
    /// Timestamp of the earlier reading (Unix millis)
    pub start_ts: i64,
    /// Timestamp of the later reading (Unix millis)
    pub end_ts: i64,
    /// Net quantity consumed over the interval, one decimal place
    pub consumed_quantity: f64,
    /// Restock quantity added strictly inside the interval
    pub restocked_quantity: f64,
    pub duration_days: f64,
}

impl ConsumptionInterval {
    /// Average units consumed per day over this interval
    pub fn daily_rate(&self) -> f64 {
        if self.duration_days > 0.0 {
            self.consumed_quantity / self.duration_days
        } else {
            0.0
        }
    }
}

/// Projected restock timing and reorder quantity for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestockPrediction {
    pub item_name: String,
    pub current_stock: f64,
    /// Unit label, display only
    pub unit: String,
    pub restock_threshold: f64,
    /// Calendar date the item is projected to hit its threshold;
    /// `None` when no depletion is occurring
    pub predicted_restock_date: Option<NaiveDate>,
    /// Fractional days until threshold; `None` when no depletion
    pub stock_life_days: Option<f64>,
    /// Average units consumed per day
    pub daily_consumption: f64,
    /// Reorder quantity targeting a buffer above threshold
    pub optimal_restock_quantity: f64,
    /// Confidence in the prediction, 0 to 1
    pub confidence: f64,
}

/// Cost and waste figures for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostAnalysis {
    pub item_name: String,
    /// Daily consumption cost in currency, two decimal places
    pub daily_cost: f64,
    pub optimal_restock_quantity: f64,
    /// Fraction of restocked quantity never consumed before the next
    /// restock, 0 to 1
    pub waste_percentage: f64,
}

/// Velocity and trend figures for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesPerformance {
    pub item_name: String,
    /// Average units consumed per day (same figure as daily consumption)
    pub sales_velocity: f64,
    /// Cumulative consumed quantity over the observed window
    pub total_sales: f64,
    pub trend: Trend,
    /// Mean rate of the newer half of intervals; `None` when the
    /// history was too short to split
    pub recent_daily_rate: Option<f64>,
    /// Mean rate of the older half of intervals
    pub older_daily_rate: Option<f64>,
}

/// Keep/reduce/remove recommendation for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuRecommendation {
    pub item_name: String,
    pub recommendation: MenuAction,
    /// Equals the trend confidence for this item
    pub confidence: f64,
    /// Explainable reason, part of the contract
    pub reasoning: String,
}

/// Full analytics bundle for one item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemAnalytics {
    pub item_id: i64,
    pub restock_prediction: RestockPrediction,
    pub cost_analysis: CostAnalysis,
    pub sales_performance: SalesPerformance,
    pub menu_recommendation: MenuRecommendation,
}

/// Aggregate counters across all analyzed items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub total_items: i64,
    /// Items whose current stock is at or below their threshold
    pub low_stock_items: i64,
    /// Items predicted to hit their threshold within the next 7 days
    pub items_needing_restock: i64,
    /// Sum of all daily costs, two decimal places
    pub total_daily_cost: f64,
    /// Items trending up with above-median velocity
    pub high_performance_items: i64,
    pub items_to_remove: i64,
    /// When the summary was generated (Unix millis)
    pub generated_at: i64,
}
