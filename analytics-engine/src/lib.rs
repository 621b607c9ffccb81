//! Inventory Analytics Engine - 咖啡馆库存消耗分析与补货预测
//!
//! # 架构概述
//!
//! 本模块把稀疏、不规则的人工库存盘点记录转化为可执行的分析结果：
//!
//! - **消耗估算** (`analytics::consumption`): 由相邻盘点推断消耗区间
//! - **趋势分类** (`analytics::trend`): 新旧窗口消耗率对比与置信度
//! - **补货预测** (`analytics::restock`): 到达阈值的日期与最优补货量
//! - **成本分析** (`analytics::cost`): 日消耗成本与浪费率
//! - **菜单建议** (`analytics::menu`): keep/reduce/remove 决策
//! - **仪表盘汇总** (`analytics::dashboard`): 跨商品聚合计数
//!
//! # 模块结构
//!
//! ```text
//! analytics-engine/src/
//! ├── core/          # 配置
//! ├── history/       # 历史存取接口与内存实现
//! ├── analytics/     # 纯计算组件
//! ├── service/       # 编排、并发扇出、结果缓存
//! └── utils/         # 日志、时间工具
//! ```

pub mod analytics;
pub mod core;
pub mod history;
pub mod service;
pub mod utils;

// Re-export 公共类型
pub use analytics::{
    ConsumptionEstimator, CostAnalyzer, DashboardAggregator, MenuAdvisor, RestockPredictor,
    TrendClassifier,
};
pub use crate::core::AnalyticsConfig;
pub use history::{HistoryStore, MemoryHistoryStore};
pub use service::{AnalyticsReport, AnalyticsService};

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
