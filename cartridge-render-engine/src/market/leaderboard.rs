use super::item::{CatalogItem, ItemId};
use super::metrics::DerivedMetrics;
use constants::catalog::Region;
use serde::Serialize;

/// One row of the top deals leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDeal {
    /// 1-based position on the board.
    pub rank: usize,
    pub id: ItemId,
    pub name: String,
    pub region: Region,
    pub colour_hex: String,
    pub metrics: DerivedMetrics,
}

/// Rank items by undervalue percentage, highest first, and keep the first `limit`.
///
/// The sort is stable, so ties keep catalog order. A NaN percentage sorts last.
pub fn top_deals(items: &[CatalogItem], limit: usize) -> Vec<RankedDeal> {
    let mut scored: Vec<(&CatalogItem, DerivedMetrics)> = items
        .iter()
        .map(|item| (item, DerivedMetrics::of(item)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| {
        rank_key(b.undervalue_percent).total_cmp(&rank_key(a.undervalue_percent))
    });

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (item, metrics))| RankedDeal {
            rank: index + 1,
            id: item.id,
            name: item.name.clone(),
            region: item.region,
            colour_hex: item.colour_hex.clone(),
            metrics,
        })
        .collect()
}

fn rank_key(percent: f64) -> f64 {
    if percent.is_nan() {
        f64::NEG_INFINITY
    } else {
        percent
    }
}
