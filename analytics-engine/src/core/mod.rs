//! 核心模块 - 引擎配置
//!
//! - [`AnalyticsConfig`] - 分析策略配置

pub mod config;

pub use config::AnalyticsConfig;
