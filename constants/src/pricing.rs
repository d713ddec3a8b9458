/// Undervalue percentage above which the indicator ring is shown.
pub const RING_THRESHOLD_PERCENT: f64 = 30.0;

/// Undervalue percentage above which the ring switches to the high tier.
pub const HIGH_UNDERVALUE_PERCENT: f64 = 50.0;

/// Number of entries on the top deals leaderboard.
pub const TOP_DEALS_COUNT: usize = 5;
