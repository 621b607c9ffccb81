//! Console Demo - 完整分析流水线演示
//!
//! 构造一个小咖啡馆的目录与七周库存历史:
//! 1. 浓缩咖啡豆 - 消耗持续下滑, 当前已低于阈值
//! 2. 燕麦奶 - 消耗稳步上升
//! 3. 抹茶粉 - 几乎无人问津且仍在下滑
//! 4. 香草糖浆 - 没有成本数据
//!
//! 跑一遍完整分析并打印 JSON 报告。
//!
//! 运行: cargo run -p analytics-engine --example console_demo

use analytics_engine::{init_logger, AnalyticsConfig, AnalyticsService, MemoryHistoryStore};
use shared::models::{Category, Item, RestockEvent, StockReading};
use std::sync::Arc;
use tracing::info;

const DAY: i64 = 86_400_000;

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Bar Ingredients".to_string(),
            description: Some("咖啡吧常备原料".to_string()),
        },
        Category {
            id: 2,
            name: "Seasonal".to_string(),
            description: None,
        },
    ]
}

fn catalog() -> Vec<Item> {
    let item = |id: i64, name: &str, unit: &str, threshold: f64, cost: Option<f64>| Item {
        id,
        name: name.to_string(),
        unit: unit.to_string(),
        restock_threshold: threshold,
        cost_per_unit: cost,
        category_id: Some(1),
        is_active: true,
    };

    let mut seasonal = item(5, "Pumpkin Spice Mix", "kg", 1.0, Some(9.0));
    seasonal.category_id = Some(2);
    seasonal.is_active = false;

    vec![
        item(1, "Espresso Beans", "kg", 5.0, Some(12.5)),
        item(2, "Oat Milk", "liters", 6.0, Some(1.8)),
        item(3, "Matcha Powder", "kg", 2.0, Some(22.0)),
        item(4, "Vanilla Syrup", "bottles", 4.0, None),
        seasonal,
    ]
}

async fn seed(
    store: &MemoryHistoryStore,
    item_id: i64,
    base: i64,
    readings: &[(i64, f64)],
    restocks: &[(i64, f64)],
) {
    for &(day, quantity) in readings {
        store
            .record_reading(StockReading {
                staff_name: Some("Marta".to_string()),
                ..StockReading::new(item_id, base + day * DAY, quantity)
            })
            .await;
    }
    for &(day, amount) in restocks {
        store
            .record_restock(RestockEvent {
                supplier: Some("Roastery Nord".to_string()),
                ..RestockEvent::new(item_id, base + day * DAY, amount)
            })
            .await;
    }
}

async fn seed_history(store: &MemoryHistoryStore, base: i64) {
    // 浓缩咖啡豆: 日消耗从 2.0 一路降到 0.4 左右
    seed(
        store,
        1,
        base,
        &[
            (0, 20.0),
            (7, 6.0),
            (14, 8.0),
            (21, 10.0),
            (28, 3.0),
            (35, 9.0),
            (42, 5.5),
            (49, 3.0),
        ],
        &[(8, 15.0), (15, 12.0), (29, 12.0)],
    )
    .await;

    // 燕麦奶: 日消耗从 1.0 升到 2.0
    seed(
        store,
        2,
        base,
        &[
            (0, 24.0),
            (7, 17.0),
            (14, 10.0),
            (21, 20.0),
            (28, 8.0),
            (35, 18.0),
            (42, 4.0),
            (49, 14.0),
        ],
        &[(15, 20.0), (29, 24.0), (43, 24.0)],
    )
    .await;

    // 抹茶粉: 七周只动了 0.4 kg
    seed(
        store,
        3,
        base,
        &[
            (0, 3.0),
            (7, 2.8),
            (14, 2.7),
            (21, 2.6),
            (28, 2.6),
            (35, 2.6),
            (42, 2.6),
            (49, 2.6),
        ],
        &[],
    )
    .await;

    // 香草糖浆: 平稳消耗, 无成本数据
    seed(
        store,
        4,
        base,
        &[
            (0, 10.0),
            (10, 8.5),
            (20, 7.0),
            (30, 5.5),
            (40, 4.0),
            (49, 2.8),
        ],
        &[],
    )
    .await;
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    info!("🚀 Inventory analytics demo starting");

    let items = catalog();
    for category in categories() {
        let count = items
            .iter()
            .filter(|item| item.category_id == Some(category.id))
            .count();
        info!("📦 {}: {} item(s)", category.name, count);
    }

    let now = chrono::Utc::now().timestamp_millis();
    let base = now - 50 * DAY;

    let store = MemoryHistoryStore::new();
    seed_history(&store, base).await;

    let service = AnalyticsService::new(Arc::new(store), AnalyticsConfig::from_env());
    let report = service.analyze_items(&items, now).await?;

    info!(
        "📊 Analyzed {} item(s): {} low on stock, {} needing restock within a week, {} flagged for removal",
        report.summary.total_items,
        report.summary.low_stock_items,
        report.summary.items_needing_restock,
        report.summary.items_to_remove
    );
    info!(
        "💰 Total daily ingredient cost: {:.2}",
        report.summary.total_daily_cost
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
