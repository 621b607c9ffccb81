//! 分析引擎配置模块
//!
//! 支持环境变量配置:
//!
//! | 环境变量 | 说明 | 默认值 |
//! |---------|------|--------|
//! | `ANALYTICS_RESTOCK_BUFFER_DAYS` | 补货量覆盖的目标天数 | 14.0 |
//! | `ANALYTICS_RESTOCK_URGENCY_DAYS` | 仪表盘"急需补货"窗口(天) | 7 |
//! | `ANALYTICS_TREND_INCREASE_RATIO` | 判定消耗上升的比值下限 | 1.10 |
//! | `ANALYTICS_TREND_DECREASE_RATIO` | 判定消耗下降的比值上限 | 0.90 |
//! | `ANALYTICS_MIN_TREND_INTERVALS` | 趋势分类所需最少区间数 | 4 |
//! | `ANALYTICS_LOW_DATA_CONFIDENCE_CAP` | 数据不足时的置信度上限 | 0.4 |
//! | `ANALYTICS_CONFIDENCE_PER_INTERVAL` | 每个区间贡献的置信度 | 0.15 |
//! | `ANALYTICS_NEGLIGIBLE_VELOCITY` | 可忽略销量的日消耗阈值 | 0.1 |
//! | `ANALYTICS_LOW_STOCK_CONFIDENCE_FACTOR` | 低库存时的置信度折减系数 | 0.5 |

/// 分析策略配置
///
/// 所有阈值都有内建默认值, `Default` 返回纯常量,
/// `from_env()` 在默认值之上套用环境变量覆盖。
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// 补货量按多少天的消耗来备货
    pub restock_buffer_days: f64,
    /// 预计补货日期落在几天内算"急需补货"
    pub restock_urgency_days: i64,
    /// 近期日消耗 / 早期日消耗 超过该值判定为上升
    pub trend_increase_ratio: f64,
    /// 近期日消耗 / 早期日消耗 低于该值判定为下降
    pub trend_decrease_ratio: f64,
    /// 少于该区间数时不做趋势分类
    pub min_trend_intervals: usize,
    /// 区间数不足时置信度的上限
    pub low_data_confidence_cap: f64,
    /// 每个有效区间为置信度贡献的份额
    pub confidence_per_interval: f64,
    /// 日消耗不超过该值视为销量可忽略
    pub negligible_velocity: f64,
    /// 当前库存已低于阈值时对置信度的折减
    pub low_stock_confidence_factor: f64,
}

impl AnalyticsConfig {
    /// 从环境变量加载配置, 解析失败的变量回落到默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            restock_buffer_days: env_or(
                "ANALYTICS_RESTOCK_BUFFER_DAYS",
                defaults.restock_buffer_days,
            ),
            restock_urgency_days: env_or(
                "ANALYTICS_RESTOCK_URGENCY_DAYS",
                defaults.restock_urgency_days,
            ),
            trend_increase_ratio: env_or(
                "ANALYTICS_TREND_INCREASE_RATIO",
                defaults.trend_increase_ratio,
            ),
            trend_decrease_ratio: env_or(
                "ANALYTICS_TREND_DECREASE_RATIO",
                defaults.trend_decrease_ratio,
            ),
            min_trend_intervals: env_or(
                "ANALYTICS_MIN_TREND_INTERVALS",
                defaults.min_trend_intervals,
            ),
            low_data_confidence_cap: env_or(
                "ANALYTICS_LOW_DATA_CONFIDENCE_CAP",
                defaults.low_data_confidence_cap,
            ),
            confidence_per_interval: env_or(
                "ANALYTICS_CONFIDENCE_PER_INTERVAL",
                defaults.confidence_per_interval,
            ),
            negligible_velocity: env_or(
                "ANALYTICS_NEGLIGIBLE_VELOCITY",
                defaults.negligible_velocity,
            ),
            low_stock_confidence_factor: env_or(
                "ANALYTICS_LOW_STOCK_CONFIDENCE_FACTOR",
                defaults.low_stock_confidence_factor,
            ),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            restock_buffer_days: 14.0,
            restock_urgency_days: 7,
            trend_increase_ratio: 1.10,
            trend_decrease_ratio: 0.90,
            min_trend_intervals: 4,
            low_data_confidence_cap: 0.4,
            confidence_per_interval: 0.15,
            negligible_velocity: 0.1,
            low_stock_confidence_factor: 0.5,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.restock_buffer_days, 14.0);
        assert_eq!(config.restock_urgency_days, 7);
        assert_eq!(config.trend_increase_ratio, 1.10);
        assert_eq!(config.trend_decrease_ratio, 0.90);
        assert_eq!(config.min_trend_intervals, 4);
        assert_eq!(config.low_data_confidence_cap, 0.4);
        assert_eq!(config.confidence_per_interval, 0.15);
        assert_eq!(config.negligible_velocity, 0.1);
        assert_eq!(config.low_stock_confidence_factor, 0.5);
    }

    #[test]
    fn test_increase_ratio_above_decrease_ratio() {
        let config = AnalyticsConfig::default();
        assert!(config.trend_increase_ratio > config.trend_decrease_ratio);
    }
}
