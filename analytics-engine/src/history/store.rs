//! 历史数据源接口

use async_trait::async_trait;
use shared::models::{RestockEvent, StockReading};
use shared::AppResult;

/// 库存历史数据源
///
/// 分析服务通过该接口读取盘点与补货历史。实现方不需要保证
/// 返回顺序, 引擎会在分析前按时间戳重新排序。查询失败时应返回
/// `AppError::upstream`, 服务层会原样向调用方传播。
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// 某个物料的全部盘点记录
    async fn list_stock_readings(&self, item_id: i64) -> AppResult<Vec<StockReading>>;

    /// 某个物料的全部补货记录
    async fn list_restock_events(&self, item_id: i64) -> AppResult<Vec<RestockEvent>>;
}
