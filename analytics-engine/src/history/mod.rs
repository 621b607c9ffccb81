//! 历史数据访问层
//!
//! - [`HistoryStore`] - 盘点/补货历史数据源接口
//! - [`MemoryHistoryStore`] - 内存实现, 用于测试与演示

mod memory;
mod store;

pub use memory::MemoryHistoryStore;
pub use store::HistoryStore;
