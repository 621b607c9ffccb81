//! In-memory history store for tests and demos

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{RestockEvent, StockReading};
use shared::AppResult;
use tokio::sync::RwLock;

use super::HistoryStore;

/// 内存版历史存储
///
/// 按物料 ID 分桶, 桶内保持插入顺序。用于测试与演示,
/// 生产环境由调用方接入自己的 [`HistoryStore`] 实现。
#[derive(Debug, Clone)]
pub struct MemoryHistoryStore {
    inner: Arc<RwLock<MemoryHistoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryHistoryInner {
    readings: HashMap<i64, Vec<StockReading>>,
    restocks: HashMap<i64, Vec<RestockEvent>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryHistoryInner::default())),
        }
    }

    /// 追加一条盘点记录
    pub async fn record_reading(&self, reading: StockReading) {
        let mut inner = self.inner.write().await;
        inner.readings.entry(reading.item_id).or_default().push(reading);
    }

    /// 追加一条补货记录
    pub async fn record_restock(&self, event: RestockEvent) {
        let mut inner = self.inner.write().await;
        inner.restocks.entry(event.item_id).or_default().push(event);
    }

    /// 某个物料的记录总数 (盘点 + 补货)
    pub async fn record_count(&self, item_id: i64) -> usize {
        let inner = self.inner.read().await;
        inner.readings.get(&item_id).map(Vec::len).unwrap_or(0)
            + inner.restocks.get(&item_id).map(Vec::len).unwrap_or(0)
    }

    /// 清空全部历史
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.readings.clear();
        inner.restocks.clear();
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn list_stock_readings(&self, item_id: i64) -> AppResult<Vec<StockReading>> {
        let inner = self.inner.read().await;
        Ok(inner.readings.get(&item_id).cloned().unwrap_or_default())
    }

    async fn list_restock_events(&self, item_id: i64) -> AppResult<Vec<RestockEvent>> {
        let inner = self.inner.read().await;
        Ok(inner.restocks.get(&item_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_reading(item_id: i64, timestamp: i64, quantity: f64) -> StockReading {
        StockReading::new(item_id, timestamp, quantity)
    }

    fn create_restock(item_id: i64, timestamp: i64, amount: f64) -> RestockEvent {
        RestockEvent::new(item_id, timestamp, amount)
    }

    #[tokio::test]
    async fn test_record_and_list() {
        let store = MemoryHistoryStore::new();

        store.record_reading(create_reading(1, 100, 20.0)).await;
        store.record_reading(create_reading(1, 200, 15.0)).await;
        store.record_restock(create_restock(1, 150, 10.0)).await;

        let readings = store.list_stock_readings(1).await.unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].quantity, 20.0);
        assert_eq!(readings[1].quantity, 15.0);

        let restocks = store.list_restock_events(1).await.unwrap();
        assert_eq!(restocks.len(), 1);
        assert_eq!(restocks[0].amount_added, 10.0);

        assert_eq!(store.record_count(1).await, 3);
    }

    #[tokio::test]
    async fn test_unknown_item_is_empty() {
        let store = MemoryHistoryStore::new();

        assert!(store.list_stock_readings(99).await.unwrap().is_empty());
        assert!(store.list_restock_events(99).await.unwrap().is_empty());
        assert_eq!(store.record_count(99).await, 0);
    }

    #[tokio::test]
    async fn test_items_are_isolated() {
        let store = MemoryHistoryStore::new();

        store.record_reading(create_reading(1, 100, 20.0)).await;
        store.record_reading(create_reading(2, 100, 50.0)).await;

        assert_eq!(store.list_stock_readings(1).await.unwrap().len(), 1);
        assert_eq!(store.list_stock_readings(2).await.unwrap().len(), 1);
        assert_eq!(store.list_stock_readings(2).await.unwrap()[0].quantity, 50.0);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let store = MemoryHistoryStore::new();

        // Out-of-order timestamps stay in insertion order here;
        // the estimator sorts before building intervals.
        store.record_reading(create_reading(1, 300, 5.0)).await;
        store.record_reading(create_reading(1, 100, 20.0)).await;

        let readings = store.list_stock_readings(1).await.unwrap();
        assert_eq!(readings[0].timestamp, 300);
        assert_eq!(readings[1].timestamp, 100);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryHistoryStore::new();

        store.record_reading(create_reading(1, 100, 20.0)).await;
        store.record_restock(create_restock(1, 150, 10.0)).await;
        store.clear().await;

        assert!(store.list_stock_readings(1).await.unwrap().is_empty());
        assert!(store.list_restock_events(1).await.unwrap().is_empty());
    }
}
