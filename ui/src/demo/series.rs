//! Synthetic monthly revenue series for the demo dashboard.

use crate::core::format::month_abbrev;
use crate::core::random::RandomSource;

/// Starting value of the random walk.
pub const WALK_BASE: i64 = 45_000;
/// Lowest revenue ever emitted.
pub const REVENUE_FLOOR: i64 = 20_000;
pub const STEP_MIN: i64 = -3_000;
pub const STEP_MAX: i64 = 12_000;
pub const TARGET_BASE: i64 = 60_000;
pub const TARGET_STEP: i64 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenuePoint {
    /// Zero-based position in the series; the month label cycles every 12.
    pub month_index: usize,
    pub month: &'static str,
    pub revenue: i64,
    pub target: i64,
}

/// Produce `count` points of a fresh random walk.
///
/// The floor applies to the emitted revenue only; the walk keeps its own value, so a
/// long downward run stays pinned at the floor until the walk climbs back above it.
pub fn generate_series(count: usize, rng: &mut impl RandomSource) -> Vec<RevenuePoint> {
    let mut walk = WALK_BASE;
    (0..count)
        .map(|i| {
            walk += rng.int_in(STEP_MIN, STEP_MAX);
            RevenuePoint {
                month_index: i,
                month: month_abbrev(i),
                revenue: walk.max(REVENUE_FLOOR),
                target: TARGET_BASE + i as i64 * TARGET_STEP,
            }
        })
        .collect()
}
