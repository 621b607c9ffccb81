//! Restock prediction
//!
//! Projects days-to-threshold and a reorder quantity from the current
//! stock level and the estimated daily consumption rate. The target is
//! proactive reordering, so depletion is measured against the restock
//! threshold, not against zero stock.

use rust_decimal::Decimal;
use shared::models::{Item, RestockPrediction};

use crate::core::AnalyticsConfig;
use crate::utils::time::{add_days_millis, millis_to_date};

use super::quantity::{quantity_to_f64, to_decimal};

/// Projects restock timing and reorder quantities
#[derive(Debug, Clone)]
pub struct RestockPredictor {
    config: AnalyticsConfig,
}

impl RestockPredictor {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Predict when `item` hits its threshold and how much to reorder
    ///
    /// `daily_rate <= 0` means no depletion is occurring, so the date
    /// and stock life come back as `None` rather than a sentinel.
    /// Confidence is the trend confidence, halved when the item is
    /// already at or below its threshold: a count taken while already
    /// low means the model is reacting late, not predicting ahead.
    pub fn predict(
        &self,
        item: &Item,
        current_quantity: f64,
        daily_rate: f64,
        confidence: f64,
        now: i64,
    ) -> RestockPrediction {
        let confidence = if item.is_low_stock(current_quantity) {
            confidence * self.config.low_stock_confidence_factor
        } else {
            confidence
        };

        // Reorder enough to cover the buffer window and land back above
        // the threshold, regardless of whether depletion is observed.
        let optimal = (to_decimal(daily_rate) * to_decimal(self.config.restock_buffer_days)
            + to_decimal(item.restock_threshold)
            - to_decimal(current_quantity))
        .max(Decimal::ZERO);
        let optimal_restock_quantity = quantity_to_f64(optimal);

        let (predicted_restock_date, stock_life_days) = if daily_rate <= 0.0 {
            (None, None)
        } else {
            let life = (current_quantity - item.restock_threshold).max(0.0) / daily_rate;
            let date = millis_to_date(add_days_millis(now, life));
            (date, Some(life))
        };

        RestockPrediction {
            item_name: item.name.clone(),
            current_stock: current_quantity,
            unit: item.unit.clone(),
            restock_threshold: item.restock_threshold,
            predicted_restock_date,
            stock_life_days,
            daily_consumption: daily_rate,
            optimal_restock_quantity,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2025-03-14 00:00:00 UTC
    const NOW: i64 = 1_741_910_400_000;

    fn create_item(restock_threshold: f64) -> Item {
        Item {
            id: 1,
            name: "Espresso Beans".to_string(),
            unit: "kg".to_string(),
            restock_threshold,
            cost_per_unit: Some(12.5),
            category_id: Some(3),
            is_active: true,
        }
    }

    fn predictor() -> RestockPredictor {
        RestockPredictor::new(AnalyticsConfig::default())
    }

    #[test]
    fn test_projection_to_threshold() {
        let prediction = predictor().predict(&create_item(5.0), 10.0, 2.0, 0.8, NOW);

        assert_eq!(prediction.stock_life_days, Some(2.5));
        assert_eq!(prediction.optimal_restock_quantity, 23.0);
        assert_eq!(
            prediction.predicted_restock_date,
            NaiveDate::from_ymd_opt(2025, 3, 16)
        );
        assert_eq!(prediction.confidence, 0.8);
        assert_eq!(prediction.daily_consumption, 2.0);
    }

    #[test]
    fn test_zero_rate_yields_no_date() {
        let prediction = predictor().predict(&create_item(5.0), 10.0, 0.0, 0.3, NOW);

        assert!(prediction.predicted_restock_date.is_none());
        assert!(prediction.stock_life_days.is_none());
        // The buffer formula still applies with a zero rate.
        assert_eq!(prediction.optimal_restock_quantity, 0.0);
        assert_eq!(prediction.confidence, 0.3);
    }

    #[test]
    fn test_zero_rate_below_threshold_still_orders() {
        let prediction = predictor().predict(&create_item(5.0), 2.0, 0.0, 0.4, NOW);

        assert!(prediction.stock_life_days.is_none());
        assert_eq!(prediction.optimal_restock_quantity, 3.0);
    }

    #[test]
    fn test_low_stock_halves_confidence() {
        let prediction = predictor().predict(&create_item(5.0), 4.0, 1.0, 0.8, NOW);

        assert_eq!(prediction.confidence, 0.4);
        // Already below threshold: restock is due immediately.
        assert_eq!(prediction.stock_life_days, Some(0.0));
        assert_eq!(
            prediction.predicted_restock_date,
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
    }

    #[test]
    fn test_confidence_discount_at_exact_threshold() {
        let prediction = predictor().predict(&create_item(5.0), 5.0, 1.0, 0.6, NOW);
        assert_eq!(prediction.confidence, 0.3);
    }

    #[test]
    fn test_optimal_quantity_never_negative() {
        let prediction = predictor().predict(&create_item(5.0), 100.0, 1.0, 0.9, NOW);
        assert_eq!(prediction.optimal_restock_quantity, 0.0);
    }

    #[test]
    fn test_faster_consumption_never_delays_restock() {
        let item = create_item(5.0);
        let rates = [0.5, 1.0, 2.0, 4.0];

        let predictions: Vec<_> = rates
            .iter()
            .map(|&rate| predictor().predict(&item, 20.0, rate, 0.9, NOW))
            .collect();

        for pair in predictions.windows(2) {
            assert!(pair[1].stock_life_days.unwrap() < pair[0].stock_life_days.unwrap());
            assert!(pair[1].predicted_restock_date <= pair[0].predicted_restock_date);
        }
    }

    #[test]
    fn test_far_future_date_unrepresentable() {
        // Near-zero consumption projects millennia out; the fractional
        // stock life survives even when no calendar date can.
        let prediction = predictor().predict(&create_item(5.0), 1_000_000.0, 1e-12, 0.9, NOW);

        assert!(prediction.stock_life_days.unwrap() > 1e15);
        assert!(prediction.predicted_restock_date.is_none());
    }
}
