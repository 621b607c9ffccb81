//! Consumption inference
//!
//! Rebuilds per-item consumption intervals from raw stock counts and
//! restock logs. Staff-entered history is messy, so normalization and
//! the negative-consumption discard rule both live here.

use rust_decimal::Decimal;
use shared::models::{ConsumptionInterval, RestockEvent, StockReading};
use tracing::{debug, warn};

use crate::utils::time::millis_to_days;

use super::quantity::{quantity_to_f64, round_quantity, to_decimal};

/// Per-item consumption estimator
///
/// Construction normalizes the history (sort by timestamp, collapse
/// duplicate timestamps keeping the latest-inserted reading, clamp
/// negative counts to zero, drop non-positive restock amounts).
/// [`intervals`](Self::intervals) is lazy and restartable; each call
/// recomputes from the normalized history in chronological order.
#[derive(Debug, Clone)]
pub struct ConsumptionEstimator {
    item_id: i64,
    readings: Vec<StockReading>,
    restocks: Vec<RestockEvent>,
    discarded: usize,
}

impl ConsumptionEstimator {
    pub fn new(
        item_id: i64,
        readings: Vec<StockReading>,
        mut restocks: Vec<RestockEvent>,
    ) -> Self {
        let mut sorted = readings;
        // Stable sort: readings at the same timestamp keep insertion order,
        // so the collapse below resolves duplicates to the latest-inserted.
        sorted.sort_by_key(|r| r.timestamp);

        let mut deduped: Vec<StockReading> = Vec::with_capacity(sorted.len());
        for mut reading in sorted {
            reading.quantity = round_quantity(reading.quantity.max(0.0));
            match deduped.last_mut() {
                Some(last) if last.timestamp == reading.timestamp => *last = reading,
                _ => deduped.push(reading),
            }
        }

        restocks.retain(|e| e.amount_added > 0.0);
        restocks.sort_by_key(|e| e.timestamp);

        let mut estimator = Self {
            item_id,
            readings: deduped,
            restocks,
            discarded: 0,
        };

        let mut discarded = 0;
        for pair in estimator.readings.windows(2) {
            if estimator.build_interval(&pair[0], &pair[1]).is_none() {
                discarded += 1;
                debug!(
                    "Item {}: interval {} -> {} discarded (negative inferred consumption)",
                    item_id, pair[0].timestamp, pair[1].timestamp
                );
            }
        }
        if discarded > 0 {
            warn!(
                "Item {}: discarded {} unreliable interval(s) out of {}",
                item_id,
                discarded,
                estimator.readings.len() - 1
            );
        }
        estimator.discarded = discarded;

        estimator
    }

    /// Inferred consumption intervals in chronological order
    pub fn intervals(&self) -> impl Iterator<Item = ConsumptionInterval> + '_ {
        self.readings
            .windows(2)
            .filter_map(|pair| self.build_interval(&pair[0], &pair[1]))
    }

    /// The most recent stock reading, if any
    pub fn latest_reading(&self) -> Option<&StockReading> {
        self.readings.last()
    }

    /// Number of readings after normalization
    pub fn reading_count(&self) -> usize {
        self.readings.len()
    }

    /// Number of consecutive-reading pairs discarded as unreliable
    pub fn discarded_intervals(&self) -> usize {
        self.discarded
    }

    fn build_interval(
        &self,
        prev: &StockReading,
        next: &StockReading,
    ) -> Option<ConsumptionInterval> {
        let duration_days = millis_to_days(next.timestamp - prev.timestamp);
        if duration_days <= 0.0 {
            return None;
        }

        let restocked = self.restocked_between(prev.timestamp, next.timestamp);
        let consumed = to_decimal(prev.quantity) + restocked - to_decimal(next.quantity);
        // A negative balance means a miscount or an unlogged restock.
        // Clamping would fabricate consumption, so the pair is dropped.
        if consumed < Decimal::ZERO {
            return None;
        }

        Some(ConsumptionInterval {
            item_id: self.item_id,
            start_ts: prev.timestamp,
            end_ts: next.timestamp,
            consumed_quantity: quantity_to_f64(consumed),
            restocked_quantity: quantity_to_f64(restocked),
            duration_days,
        })
    }

    /// Restock amounts logged strictly between two reading timestamps
    fn restocked_between(&self, start: i64, end: i64) -> Decimal {
        self.restocks
            .iter()
            .filter(|e| e.timestamp > start && e.timestamp < end)
            .map(|e| to_decimal(e.amount_added))
            .sum()
    }
}
