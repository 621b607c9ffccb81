//! Dashboard aggregation
//!
//! Pure fold of per-item analytics into the summary counters shown on
//! the overview screen. Items with missing predictions still count
//! toward totals so the tabs stay consistent with each other.

use chrono::Days;
use rust_decimal::Decimal;
use shared::models::{DashboardSummary, ItemAnalytics, MenuAction, Trend};

use crate::core::AnalyticsConfig;
use crate::utils::time::millis_to_date;

use super::quantity::{money_to_f64, to_decimal};

/// Folds per-item results into dashboard counters
#[derive(Debug, Clone)]
pub struct DashboardAggregator {
    config: AnalyticsConfig,
}

impl DashboardAggregator {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Summarize a batch of per-item results
    ///
    /// "Needing restock" means the predicted date falls on or before
    /// `now + restock_urgency_days`; overdue items qualify too. High
    /// performers must be trending up with velocity strictly above the
    /// cross-item median.
    pub fn summarize(&self, results: &[ItemAnalytics], now: i64) -> DashboardSummary {
        let restock_deadline = millis_to_date(now).and_then(|today| {
            today.checked_add_days(Days::new(self.config.restock_urgency_days.max(0) as u64))
        });
        let items_needing_restock = match restock_deadline {
            Some(deadline) => results
                .iter()
                .filter(|r| {
                    r.restock_prediction
                        .predicted_restock_date
                        .is_some_and(|date| date <= deadline)
                })
                .count(),
            None => 0,
        };

        let low_stock_items = results
            .iter()
            .filter(|r| {
                r.restock_prediction.current_stock <= r.restock_prediction.restock_threshold
            })
            .count();

        let total_daily_cost = money_to_f64(
            results
                .iter()
                .map(|r| to_decimal(r.cost_analysis.daily_cost))
                .sum::<Decimal>(),
        );

        let median = median_velocity(results);
        let high_performance_items = results
            .iter()
            .filter(|r| {
                r.sales_performance.trend == Trend::Increasing
                    && r.sales_performance.sales_velocity > median
            })
            .count();

        let items_to_remove = results
            .iter()
            .filter(|r| r.menu_recommendation.recommendation == MenuAction::Remove)
            .count();

        DashboardSummary {
            total_items: results.len() as i64,
            low_stock_items: low_stock_items as i64,
            items_needing_restock: items_needing_restock as i64,
            total_daily_cost,
            high_performance_items: high_performance_items as i64,
            items_to_remove: items_to_remove as i64,
            generated_at: now,
        }
    }
}

/// Median sales velocity across the batch (midpoint of the two middle
/// values for an even count; 0.0 for an empty batch)
fn median_velocity(results: &[ItemAnalytics]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let mut velocities: Vec<f64> = results
        .iter()
        .map(|r| r.sales_performance.sales_velocity)
        .collect();
    velocities.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = velocities.len();
    if n % 2 == 1 {
        velocities[n / 2]
    } else {
        (velocities[n / 2 - 1] + velocities[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{CostAnalysis, MenuRecommendation, RestockPrediction, SalesPerformance};

    // 2025-03-14 00:00:00 UTC
    const NOW: i64 = 1_741_910_400_000;

    fn create_result(
        item_id: i64,
        velocity: f64,
        trend: Trend,
        daily_cost: f64,
        action: MenuAction,
        restock_in_days: Option<u64>,
    ) -> ItemAnalytics {
        let name = format!("Item {}", item_id);
        let date = restock_in_days.and_then(|days| {
            millis_to_date(NOW).unwrap().checked_add_days(Days::new(days))
        });
        ItemAnalytics {
            item_id,
            restock_prediction: RestockPrediction {
                item_name: name.clone(),
                current_stock: 10.0,
                unit: "kg".to_string(),
                restock_threshold: 5.0,
                predicted_restock_date: date,
                stock_life_days: restock_in_days.map(|d| d as f64),
                daily_consumption: velocity,
                optimal_restock_quantity: 0.0,
                confidence: 0.5,
            },
            cost_analysis: CostAnalysis {
                item_name: name.clone(),
                daily_cost,
                optimal_restock_quantity: 0.0,
                waste_percentage: 0.0,
            },
            sales_performance: SalesPerformance {
                item_name: name.clone(),
                sales_velocity: velocity,
                total_sales: velocity * 10.0,
                trend,
                recent_daily_rate: None,
                older_daily_rate: None,
            },
            menu_recommendation: MenuRecommendation {
                item_name: name,
                recommendation: action,
                confidence: 0.5,
                reasoning: "stable or growing demand".to_string(),
            },
        }
    }

    fn aggregator() -> DashboardAggregator {
        DashboardAggregator::new(AnalyticsConfig::default())
    }

    #[test]
    fn test_empty_batch() {
        let summary = aggregator().summarize(&[], NOW);

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.low_stock_items, 0);
        assert_eq!(summary.items_needing_restock, 0);
        assert_eq!(summary.total_daily_cost, 0.0);
        assert_eq!(summary.high_performance_items, 0);
        assert_eq!(summary.items_to_remove, 0);
        assert_eq!(summary.generated_at, NOW);
    }

    #[test]
    fn test_restock_window() {
        let results = vec![
            create_result(1, 1.0, Trend::Stable, 0.0, MenuAction::Keep, Some(0)),
            create_result(2, 1.0, Trend::Stable, 0.0, MenuAction::Keep, Some(7)),
            create_result(3, 1.0, Trend::Stable, 0.0, MenuAction::Keep, Some(8)),
            create_result(4, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        assert_eq!(summary.items_needing_restock, 2);
        assert_eq!(summary.total_items, 4);
    }

    #[test]
    fn test_overdue_restock_counts() {
        let mut result = create_result(1, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None);
        result.restock_prediction.predicted_restock_date = NaiveDate::from_ymd_opt(2025, 3, 10);

        let summary = aggregator().summarize(&[result], NOW);
        assert_eq!(summary.items_needing_restock, 1);
    }

    #[test]
    fn test_low_stock_count() {
        let mut low = create_result(1, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None);
        low.restock_prediction.current_stock = 4.0;
        let exact = {
            let mut r = create_result(2, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None);
            r.restock_prediction.current_stock = 5.0;
            r
        };
        let fine = create_result(3, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None);

        let summary = aggregator().summarize(&[low, exact, fine], NOW);
        assert_eq!(summary.low_stock_items, 2);
    }

    #[test]
    fn test_total_daily_cost() {
        let results = vec![
            create_result(1, 1.0, Trend::Stable, 1.25, MenuAction::Keep, None),
            create_result(2, 1.0, Trend::Stable, 2.50, MenuAction::Keep, None),
            create_result(3, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        assert_eq!(summary.total_daily_cost, 3.75);
    }

    #[test]
    fn test_high_performers_strictly_above_median() {
        let results = vec![
            create_result(1, 1.0, Trend::Increasing, 0.0, MenuAction::Keep, None),
            create_result(2, 2.0, Trend::Increasing, 0.0, MenuAction::Keep, None),
            create_result(3, 3.0, Trend::Increasing, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        // Median velocity is 2.0; only the item above it qualifies.
        assert_eq!(summary.high_performance_items, 1);
    }

    #[test]
    fn test_high_performer_requires_increasing_trend() {
        let results = vec![
            create_result(1, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None),
            create_result(2, 2.0, Trend::Stable, 0.0, MenuAction::Keep, None),
            create_result(3, 10.0, Trend::Stable, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        assert_eq!(summary.high_performance_items, 0);
    }

    #[test]
    fn test_even_count_median() {
        let results = vec![
            create_result(1, 1.0, Trend::Stable, 0.0, MenuAction::Keep, None),
            create_result(2, 2.0, Trend::Stable, 0.0, MenuAction::Keep, None),
            create_result(3, 3.0, Trend::Increasing, 0.0, MenuAction::Keep, None),
            create_result(4, 10.0, Trend::Increasing, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        // Median is 2.5; both increasing items sit above it.
        assert_eq!(summary.high_performance_items, 2);
    }

    #[test]
    fn test_uniform_velocities_have_no_high_performers() {
        let results: Vec<_> = (1..=3)
            .map(|id| create_result(id, 2.0, Trend::Increasing, 0.0, MenuAction::Keep, None))
            .collect();
        let summary = aggregator().summarize(&results, NOW);

        assert_eq!(summary.high_performance_items, 0);
    }

    #[test]
    fn test_items_to_remove() {
        let results = vec![
            create_result(1, 0.0, Trend::Decreasing, 0.0, MenuAction::Remove, None),
            create_result(2, 0.0, Trend::Stable, 0.0, MenuAction::Reduce, None),
            create_result(3, 5.0, Trend::Stable, 0.0, MenuAction::Keep, None),
        ];
        let summary = aggregator().summarize(&results, NOW);

        assert_eq!(summary.items_to_remove, 1);
    }

    #[test]
    fn test_idempotent() {
        let results = vec![
            create_result(1, 1.0, Trend::Increasing, 4.2, MenuAction::Keep, Some(3)),
            create_result(2, 6.0, Trend::Increasing, 0.8, MenuAction::Keep, Some(12)),
        ];

        let first = aggregator().summarize(&results, NOW);
        let second = aggregator().summarize(&results, NOW);
        assert_eq!(first, second);
    }
}
