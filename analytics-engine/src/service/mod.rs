//! 分析服务层
//!
//! # 服务列表
//!
//! - [`AnalyticsService`] - 库存分析服务（含画像缓存）
//!
//! 每次分析请求对目录快照里的活跃物料各跑一遍流水线:
//! 消耗区间 → 趋势 → 补货预测/成本 → 菜单建议, 最后汇总仪表盘。
//! 单个物料内部串行, 物料之间按可用核数并发。

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{
    CostAnalysis, DashboardSummary, Item, ItemAnalytics, RestockPrediction, SalesPerformance,
};
use shared::AppResult;
use tracing::debug;

use crate::analytics::quantity::{quantity_to_f64, to_decimal};
use crate::analytics::{
    top_quartile_threshold, ConsumptionEstimator, CostAnalyzer, DashboardAggregator, MenuAdvisor,
    RestockPredictor, TrendClassifier,
};
use crate::core::AnalyticsConfig;
use crate::history::HistoryStore;

mod cache;

use cache::{ItemProfile, ProfileCache};

// =============================================================================
// Types
// =============================================================================

/// Full result of one analytics run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsReport {
    /// Per-item analytics in catalog order
    pub items: Vec<ItemAnalytics>,
    pub summary: DashboardSummary,
}

// =============================================================================
// AnalyticsService
// =============================================================================

/// Inventory analytics service
///
/// Owns the history source, the analytic components and the profile
/// cache. `now` is injected by the caller on every entry point so runs
/// are reproducible.
pub struct AnalyticsService {
    store: Arc<dyn HistoryStore>,
    cache: ProfileCache,
    trend: TrendClassifier,
    predictor: RestockPredictor,
    analyzer: CostAnalyzer,
    advisor: MenuAdvisor,
    aggregator: DashboardAggregator,
}

impl AnalyticsService {
    pub fn new(store: Arc<dyn HistoryStore>, config: AnalyticsConfig) -> Self {
        Self {
            store,
            cache: ProfileCache::new(),
            trend: TrendClassifier::new(config.clone()),
            predictor: RestockPredictor::new(config.clone()),
            analyzer: CostAnalyzer::new(),
            advisor: MenuAdvisor::new(config.clone()),
            aggregator: DashboardAggregator::new(config),
        }
    }

    /// Run the full pipeline over a catalog snapshot
    ///
    /// Inactive items are skipped. Items with no usable history still
    /// produce zeroed results so dashboard counts stay consistent. A
    /// history fetch failure aborts the whole run; partial dashboards
    /// would silently under-count.
    pub async fn analyze_items(&self, items: &[Item], now: i64) -> AppResult<AnalyticsReport> {
        let active: Vec<&Item> = items.iter().filter(|item| item.is_active).collect();
        debug!(
            "Analyzing {} active item(s) of {} in catalog",
            active.len(),
            items.len()
        );

        let parallelism = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        // Fan out per-item profile building, then restore catalog order.
        let mut indexed: Vec<(usize, ItemProfile)> =
            stream::iter(active.iter().copied().enumerate())
                .map(|(idx, item)| async move { self.item_profile(item).await.map(|p| (idx, p)) })
                .buffer_unordered(parallelism)
                .try_collect()
                .await?;
        indexed.sort_by_key(|(idx, _)| *idx);
        let profiles: Vec<ItemProfile> = indexed.into_iter().map(|(_, profile)| profile).collect();

        let mut priced: Vec<(RestockPrediction, CostAnalysis)> = Vec::with_capacity(active.len());
        for (item, profile) in active.iter().zip(&profiles) {
            priced.push(self.prediction_and_cost(item, profile, now));
        }

        // The advisor needs the cross-item cost distribution, so the
        // verdicts only happen once every item's cost is known.
        let daily_costs: Vec<f64> = priced.iter().map(|(_, cost)| cost.daily_cost).collect();
        let top_quartile_cost = top_quartile_threshold(&daily_costs);

        let mut results: Vec<ItemAnalytics> = Vec::with_capacity(active.len());
        for ((item, profile), (prediction, cost)) in active.iter().zip(&profiles).zip(priced) {
            results.push(self.finish_item(item, profile, prediction, cost, top_quartile_cost));
        }

        let summary = self.aggregator.summarize(&results, now);
        debug!(
            "Analytics run complete: {} item(s), {} needing restock",
            summary.total_items, summary.items_needing_restock
        );

        Ok(AnalyticsReport {
            items: results,
            summary,
        })
    }

    /// Analyze a single item outside a batch run
    ///
    /// `top_quartile_cost` is the cross-item cost context the menu
    /// rules compare against; callers without a batch in hand pass 0.0,
    /// which makes any positive cost count as relatively high. Active
    /// status is not checked here, the item was asked for by name.
    pub async fn analyze_item(
        &self,
        item: &Item,
        top_quartile_cost: f64,
        now: i64,
    ) -> AppResult<ItemAnalytics> {
        let profile = self.item_profile(item).await?;
        let (prediction, cost) = self.prediction_and_cost(item, &profile, now);
        Ok(self.finish_item(item, &profile, prediction, cost, top_quartile_cost))
    }

    /// Build or reuse the consumption/trend profile for one item
    async fn item_profile(&self, item: &Item) -> AppResult<ItemProfile> {
        let readings = self.store.list_stock_readings(item.id).await?;
        let restocks = self.store.list_restock_events(item.id).await?;

        let record_count = readings.len() + restocks.len();
        let latest_ts = readings
            .iter()
            .map(|r| r.timestamp)
            .chain(restocks.iter().map(|e| e.timestamp))
            .max();

        if let Some(profile) = self.cache.get(item.id, latest_ts, record_count) {
            debug!("Item {}: profile cache hit", item.id);
            return Ok(profile);
        }

        let estimator = ConsumptionEstimator::new(item.id, readings, restocks);
        let intervals: Vec<_> = estimator.intervals().collect();
        let trend = self.trend.classify(&intervals);
        let current_stock = estimator
            .latest_reading()
            .map(|r| r.quantity)
            .unwrap_or(0.0);
        let total_consumed = quantity_to_f64(
            intervals
                .iter()
                .map(|i| to_decimal(i.consumed_quantity))
                .sum::<Decimal>(),
        );

        let profile = ItemProfile {
            intervals,
            trend,
            current_stock,
            total_consumed,
        };
        self.cache
            .insert(item.id, latest_ts, record_count, profile.clone());
        Ok(profile)
    }

    fn prediction_and_cost(
        &self,
        item: &Item,
        profile: &ItemProfile,
        now: i64,
    ) -> (RestockPrediction, CostAnalysis) {
        let prediction = self.predictor.predict(
            item,
            profile.current_stock,
            profile.trend.daily_rate,
            profile.trend.confidence,
            now,
        );
        let cost = self.analyzer.analyze(
            item,
            profile.trend.daily_rate,
            prediction.optimal_restock_quantity,
            &profile.intervals,
        );
        (prediction, cost)
    }

    fn finish_item(
        &self,
        item: &Item,
        profile: &ItemProfile,
        prediction: RestockPrediction,
        cost: CostAnalysis,
        top_quartile_cost: f64,
    ) -> ItemAnalytics {
        // Menu confidence mirrors the trend signal, not the (possibly
        // low-stock-discounted) prediction confidence.
        let recommendation = self.advisor.recommend(
            &item.name,
            profile.trend.daily_rate,
            profile.trend.trend,
            cost.daily_cost,
            top_quartile_cost,
            profile.trend.confidence,
        );

        let sales_performance = SalesPerformance {
            item_name: item.name.clone(),
            sales_velocity: profile.trend.daily_rate,
            total_sales: profile.total_consumed,
            trend: profile.trend.trend,
            recent_daily_rate: profile.trend.recent_rate,
            older_daily_rate: profile.trend.older_rate,
        };

        ItemAnalytics {
            item_id: item.id,
            restock_prediction: prediction,
            cost_analysis: cost,
            sales_performance,
            menu_recommendation: recommendation,
        }
    }
}
