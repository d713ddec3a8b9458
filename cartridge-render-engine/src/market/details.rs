use super::item::{CatalogItem, ItemId};
use super::metrics::{DerivedMetrics, RingTier};
use constants::catalog::{Rarity, Region};
use serde::Serialize;

/// Everything the info panel and hover tag show for one cartridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetails {
    pub id: ItemId,
    pub name: String,
    pub region: Region,
    pub release_year: u16,
    pub price: f64,
    pub market_value: f64,
    pub rarity: Rarity,
    pub colour_hex: String,
    pub metrics: DerivedMetrics,
    pub ring: Option<RingTier>,
}

impl ItemDetails {
    pub fn of(item: &CatalogItem) -> Self {
        let metrics = DerivedMetrics::of(item);
        Self {
            id: item.id,
            name: item.name.clone(),
            region: item.region,
            release_year: item.release_year,
            price: item.price,
            market_value: item.market_value,
            rarity: item.rarity,
            colour_hex: item.colour_hex.clone(),
            ring: metrics.ring(),
            metrics,
        }
    }

    /// Floating tag shown above a hovered or selected cartridge.
    pub fn tag_text(&self) -> String {
        format!(
            "{}\nCurrent: ${}\nValue: ${}\n{:.0}% Under",
            self.name, self.price, self.market_value, self.metrics.undervalue_percent,
        )
    }

    /// Multi-line summary for the native details panel.
    pub fn panel_text(&self) -> String {
        format!(
            "{}\n{} Region - {}\nCurrent Price   ${}\nMarket Value    ${}\nSavings         ${}\nUndervalue      {:.1}%\n{}",
            self.name,
            self.region,
            self.release_year,
            self.price,
            self.market_value,
            self.metrics.savings,
            self.metrics.undervalue_percent,
            self.rarity,
        )
    }
}
