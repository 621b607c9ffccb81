//! Cost and waste analysis
//!
//! Combines the consumption rate with unit cost, and measures how much
//! restocked quantity was never consumed before the next restock.
//! Missing cost data zeroes the cost figures instead of failing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::models::{ConsumptionInterval, CostAnalysis, Item};

use super::quantity::{money_to_f64, to_decimal};

/// Produces per-item cost and waste figures
#[derive(Debug, Clone, Default)]
pub struct CostAnalyzer;

impl CostAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Daily spend and waste ratio for one item
    ///
    /// Waste is the fraction of restocked quantity left unconsumed by
    /// each interval's end, summed over intervals that contain a
    /// restock. No restocks in the window reports 0: there is nothing
    /// to attribute waste to, which is not a claim of zero waste.
    pub fn analyze(
        &self,
        item: &Item,
        daily_rate: f64,
        optimal_restock_quantity: f64,
        intervals: &[ConsumptionInterval],
    ) -> CostAnalysis {
        let daily_cost = match item.cost_per_unit {
            Some(cost) => money_to_f64(to_decimal(daily_rate) * to_decimal(cost)),
            None => 0.0,
        };

        let mut surplus_total = Decimal::ZERO;
        let mut restocked_total = Decimal::ZERO;
        for interval in intervals {
            if interval.restocked_quantity > 0.0 {
                let restocked = to_decimal(interval.restocked_quantity);
                let consumed = to_decimal(interval.consumed_quantity);
                surplus_total += (restocked - consumed).max(Decimal::ZERO);
                restocked_total += restocked;
            }
        }

        let waste_percentage = if restocked_total > Decimal::ZERO {
            (surplus_total / restocked_total)
                .to_f64()
                .unwrap_or_default()
                .clamp(0.0, 1.0)
        } else {
            0.0
        };

        CostAnalysis {
            item_name: item.name.clone(),
            daily_cost,
            optimal_restock_quantity,
            waste_percentage,
        }
    }
}
