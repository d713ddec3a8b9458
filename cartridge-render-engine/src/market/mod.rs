//! Catalog data and the pricing metrics derived from it.
//!
//! Every consumer that displays or ranks a cartridge (the details panel, the
//! leaderboard, the undervalue ring on the scene) goes through
//! [`metrics::DerivedMetrics::of`] so the numbers can never disagree.

/// Per-item details payload shared by the info panel and the RPC bridge.
pub mod details;

/// Catalog validation errors.
pub mod error;

/// Catalog resource and item identity.
pub mod item;

/// Top deals ranking.
pub mod leaderboard;

/// Undervalue and savings calculations.
pub mod metrics;

pub use details::ItemDetails;
pub use error::CatalogError;
pub use item::{Catalog, CatalogItem, ItemId};
pub use leaderboard::{RankedDeal, top_deals};
pub use metrics::{DerivedMetrics, RingTier};
