//! Trend classification
//!
//! Compares the mean consumption rate of the newer half of an item's
//! intervals against the older half. Sparse histories are forced to
//! `stable` with capped confidence rather than guessed at.

use shared::models::{ConsumptionInterval, Trend};

use crate::core::AnalyticsConfig;

/// Rate, direction and confidence derived from one item's intervals
#[derive(Debug, Clone, PartialEq)]
pub struct TrendAnalysis {
    /// Duration-weighted average units consumed per day
    pub daily_rate: f64,
    pub trend: Trend,
    /// 0 to 1
    pub confidence: f64,
    /// Mean rate of the newer half; `None` when the history could not
    /// be split
    pub recent_rate: Option<f64>,
    /// Mean rate of the older half
    pub older_rate: Option<f64>,
}

impl TrendAnalysis {
    fn insufficient() -> Self {
        Self {
            daily_rate: 0.0,
            trend: Trend::Stable,
            confidence: 0.0,
            recent_rate: None,
            older_rate: None,
        }
    }
}

/// Classifies consumption direction from interval history
#[derive(Debug, Clone)]
pub struct TrendClassifier {
    config: AnalyticsConfig,
}

impl TrendClassifier {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Classify an item's consumption trend
    ///
    /// The overall rate weights each interval by its duration, so a
    /// ten-day window counts ten times as much as a single-day count.
    /// Direction comes from a median split of interval end timestamps:
    /// newer mean above `older × trend_increase_ratio` is increasing,
    /// below `older × trend_decrease_ratio` is decreasing.
    pub fn classify(&self, intervals: &[ConsumptionInterval]) -> TrendAnalysis {
        let total_duration: f64 = intervals.iter().map(|i| i.duration_days).sum();
        if intervals.is_empty() || total_duration <= 0.0 {
            return TrendAnalysis::insufficient();
        }

        let total_consumed: f64 = intervals.iter().map(|i| i.consumed_quantity).sum();
        let daily_rate = total_consumed / total_duration;
        let confidence = self.confidence(intervals);

        if intervals.len() < self.config.min_trend_intervals {
            return TrendAnalysis {
                daily_rate,
                trend: Trend::Stable,
                confidence: confidence.min(self.config.low_data_confidence_cap),
                recent_rate: None,
                older_rate: None,
            };
        }

        let median = median_end_ts(intervals);
        let older: Vec<f64> = intervals
            .iter()
            .filter(|i| i.end_ts <= median)
            .map(|i| i.daily_rate())
            .collect();
        let newer: Vec<f64> = intervals
            .iter()
            .filter(|i| i.end_ts > median)
            .map(|i| i.daily_rate())
            .collect();

        if older.is_empty() || newer.is_empty() {
            return TrendAnalysis {
                daily_rate,
                trend: Trend::Stable,
                confidence,
                recent_rate: None,
                older_rate: None,
            };
        }

        let older_rate = mean(&older);
        let recent_rate = mean(&newer);

        let trend = if recent_rate > older_rate * self.config.trend_increase_ratio {
            Trend::Increasing
        } else if recent_rate < older_rate * self.config.trend_decrease_ratio {
            Trend::Decreasing
        } else {
            Trend::Stable
        };

        TrendAnalysis {
            daily_rate,
            trend,
            confidence,
            recent_rate: Some(recent_rate),
            older_rate: Some(older_rate),
        }
    }

    /// `min(1, per_interval × n) × (1 − coefficient of variation)`
    ///
    /// More intervals and steadier rates both raise confidence. A flat
    /// zero-rate history counts as perfectly steady; the count factor
    /// still keeps single-interval confidence low.
    fn confidence(&self, intervals: &[ConsumptionInterval]) -> f64 {
        let count_factor =
            (intervals.len() as f64 * self.config.confidence_per_interval).min(1.0);

        let rates: Vec<f64> = intervals.iter().map(|i| i.daily_rate()).collect();
        let mean_rate = mean(&rates);
        let stability = if mean_rate > 0.0 {
            let variance = rates
                .iter()
                .map(|r| (r - mean_rate).powi(2))
                .sum::<f64>()
                / rates.len() as f64;
            (1.0 - variance.sqrt() / mean_rate).clamp(0.0, 1.0)
        } else {
            1.0
        };

        count_factor * stability
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of interval end timestamps (midpoint of the two middle
/// values when the count is even)
fn median_end_ts(intervals: &[ConsumptionInterval]) -> i64 {
    let mut ends: Vec<i64> = intervals.iter().map(|i| i.end_ts).collect();
    ends.sort_unstable();
    let n = ends.len();
    if n % 2 == 1 {
        ends[n / 2]
    } else {
        let lo = ends[n / 2 - 1];
        let hi = ends[n / 2];
        lo + (hi - lo) / 2
    }
}
