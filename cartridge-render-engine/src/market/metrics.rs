use super::item::CatalogItem;
use constants::pricing::{HIGH_UNDERVALUE_PERCENT, RING_THRESHOLD_PERCENT};
use serde::Serialize;

/// Undervalue percentage: the share of market value a buyer saves at the current price.
///
/// A zero market value produces a non-finite result that never qualifies for a ring.
pub fn undervalue_percent(price: f64, market_value: f64) -> f64 {
    (market_value - price) / market_value * 100.0
}

pub fn savings(price: f64, market_value: f64) -> f64 {
    market_value - price
}

/// Metrics derived from a catalog item on demand. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub undervalue_percent: f64,
    pub savings: f64,
}

impl DerivedMetrics {
    pub fn of(item: &CatalogItem) -> Self {
        Self {
            undervalue_percent: undervalue_percent(item.price, item.market_value),
            savings: savings(item.price, item.market_value),
        }
    }

    pub fn ring(&self) -> Option<RingTier> {
        RingTier::for_percent(self.undervalue_percent)
    }

    /// Share of market value saved, in `0..=1` for sane prices.
    pub fn undervalue_fraction(&self) -> f64 {
        self.undervalue_percent / 100.0
    }
}

/// Colour tier of the undervalue indicator ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RingTier {
    High,
    Moderate,
}

impl RingTier {
    /// Both thresholds are strict: exactly 30 shows nothing, exactly 50 is moderate.
    /// Non-finite percentages never earn a ring.
    pub fn for_percent(percent: f64) -> Option<Self> {
        if !percent.is_finite() || percent <= RING_THRESHOLD_PERCENT {
            return None;
        }
        if percent > HIGH_UNDERVALUE_PERCENT {
            Some(Self::High)
        } else {
            Some(Self::Moderate)
        }
    }
}
