//! Stock level classification and replenishment suggestions.
//!
//! Pure functions over quantities; no store access. The classification
//! threshold is a single parameter so call sites cannot drift apart on
//! what "critical" means.

use trama_types::{LinkId, StockPrediction, StockStatus};

/// Default classification threshold, in rolls.
pub const DEFAULT_STATUS_THRESHOLD: u32 = 5;

/// Default average daily consumption, in rolls per day.
pub const DEFAULT_AVG_DAILY_CONSUMPTION: f32 = 0.5;

/// Classifies a stock level against a threshold.
///
/// `quantity <= threshold` is critical, `quantity <= 2 * threshold` is a
/// warning, anything above is safe. Severity never increases as the
/// quantity grows.
pub fn classify(quantity: u32, threshold: u32) -> StockStatus {
    if quantity <= threshold {
        StockStatus::Critical
    } else if quantity <= threshold * 2 {
        StockStatus::Warning
    } else {
        StockStatus::Safe
    }
}

/// Suggested purchase quantity to cover `target_days` of consumption.
///
/// Returns zero when the current level already covers the target.
pub fn suggested_buy(current: u32, target_days: f32, avg_daily_consumption: f32) -> u32 {
    let target = target_days * avg_daily_consumption;
    if (current as f32) < target {
        (target - current as f32).ceil() as u32
    } else {
        0
    }
}

/// Days until the level reaches zero at the given consumption rate.
///
/// `None` when the rate is zero or negative (no projection possible).
pub fn days_until_stockout(current: u32, avg_daily_consumption: f32) -> Option<f32> {
    if avg_daily_consumption > 0.0 {
        Some(current as f32 / avg_daily_consumption)
    } else {
        None
    }
}

/// Builds a full prediction for a link from its current level.
pub fn predict(
    link_id: LinkId,
    current: u32,
    target_days: f32,
    avg_daily_consumption: f32,
    threshold: u32,
) -> StockPrediction {
    StockPrediction {
        link_id,
        days_until_stockout: days_until_stockout(current, avg_daily_consumption).unwrap_or(f32::INFINITY),
        status: classify(current, threshold),
        suggested_restock: suggested_buy(current, target_days, avg_daily_consumption),
    }
}
