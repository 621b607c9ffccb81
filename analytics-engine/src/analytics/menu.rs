//! Menu recommendations
//!
//! Ordered first-match rule policy over velocity, trend and relative
//! cost. The reasoning string is part of the contract so staff can see
//! why an item was flagged, and confidence mirrors the trend signal
//! the rules were fed.

use shared::models::{MenuAction, MenuRecommendation, Trend};

use crate::core::AnalyticsConfig;

/// Scores keep/reduce/remove recommendations
#[derive(Debug, Clone)]
pub struct MenuAdvisor {
    config: AnalyticsConfig,
}

impl MenuAdvisor {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Recommend an action for one item
    ///
    /// `top_quartile_cost` is the cross-item cost threshold computed by
    /// the caller via [`top_quartile_threshold`]; an item is "high
    /// relative cost" when its daily cost is strictly above it.
    pub fn recommend(
        &self,
        item_name: &str,
        sales_velocity: f64,
        trend: Trend,
        daily_cost: f64,
        top_quartile_cost: f64,
        confidence: f64,
    ) -> MenuRecommendation {
        let negligible = sales_velocity <= self.config.negligible_velocity;

        let (recommendation, reasoning) = if negligible && trend == Trend::Decreasing {
            (MenuAction::Remove, "negligible and falling consumption")
        } else if negligible {
            (MenuAction::Reduce, "negligible consumption, trend not worsening")
        } else if trend == Trend::Decreasing && daily_cost > top_quartile_cost {
            (MenuAction::Reduce, "high relative cost with declining demand")
        } else {
            (MenuAction::Keep, "stable or growing demand")
        };

        MenuRecommendation {
            item_name: item_name.to_string(),
            recommendation,
            confidence,
            reasoning: reasoning.to_string(),
        }
    }
}

/// Nearest-rank 75th percentile of the given daily costs
///
/// Returns 0.0 for an empty slice. Membership in the top quartile is
/// strictly-above this value, so with a single item nothing qualifies.
pub fn top_quartile_threshold(costs: &[f64]) -> f64 {
    if costs.is_empty() {
        return 0.0;
    }
    let mut sorted = costs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let rank = ((sorted.len() as f64 * 0.75).ceil() as usize).max(1);
    sorted[rank - 1]
}
