//! 时间工具函数 - Unix millis 与日历日期互转
//!
//! 历史记录与分析输入统一使用 `i64` Unix millis，
//! 只有对外展示的预测日期才转换为 `NaiveDate`。

use chrono::{DateTime, NaiveDate};

/// 一天的毫秒数
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Unix millis → UTC 日历日期
///
/// 时间戳超出 chrono 可表示范围时返回 `None`。
pub fn millis_to_date(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}

/// 毫秒跨度 → 天数 (带小数)
pub fn millis_to_days(span_millis: i64) -> f64 {
    span_millis as f64 / MILLIS_PER_DAY as f64
}

/// 时间戳加上若干天 (带小数)，溢出时饱和
pub fn add_days_millis(millis: i64, days: f64) -> i64 {
    millis.saturating_add((days * MILLIS_PER_DAY as f64) as i64)
}
