//! Leveling curve.
//!
//! `threshold_xp(level) = floor(100 * level^1.5)`. The curve is evaluated as
//! `isqrt(10_000 * level^3)` in `u128`, which is the same value with no
//! floating point involved, and `level_for_xp` searches integer levels against
//! it, so the two functions agree at every boundary.

/// Highest level whose threshold fits in a `u64`.
///
/// Every total, up to `u64::MAX`, maps to a level at or below this one.
/// Thresholds of higher levels saturate to `u64::MAX`.
pub const MAX_LEVEL: u64 = 324_050_837_587;

/// Progress of a total through its current level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: u64,
    pub xp_into_level: u64,
    pub xp_for_next_level: u64,
    /// `xp_into_level / xp_for_next_level * 100`, clamped to `[0, 100]`.
    pub percent: f64,
}

/// Cumulative XP needed to reach `level`, saturating at `u64::MAX`.
pub fn threshold_xp(level: u64) -> u64 {
    let level = u128::from(level);

    level
        .checked_mul(level)
        .and_then(|square| square.checked_mul(level))
        .and_then(|cube| cube.checked_mul(10_000))
        .map(|scaled| u64::try_from(scaled.isqrt()).unwrap_or(u64::MAX))
        .unwrap_or(u64::MAX)
}

/// Largest level whose threshold does not exceed `total_xp`.
pub fn level_for_xp(total_xp: u64) -> u64 {
    // Invariant: threshold_xp(low) <= total_xp, and high is either MAX_LEVEL
    // or a level whose threshold exceeds total_xp.
    let (mut low, mut high) = (0u64, MAX_LEVEL);
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        if threshold_xp(mid) <= total_xp {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    low
}

/// Level and in-level progress for a total.
pub fn progress(total_xp: u64) -> LevelProgress {
    let level = level_for_xp(total_xp);
    let floor = threshold_xp(level);
    let ceiling = threshold_xp(level.saturating_add(1));

    let xp_into_level = total_xp - floor;
    let xp_for_next_level = ceiling.saturating_sub(floor);

    let percent = if xp_for_next_level == 0 {
        100.0
    } else {
        (xp_into_level as f64 / xp_for_next_level as f64 * 100.0).clamp(0.0, 100.0)
    };

    LevelProgress {
        level,
        xp_into_level,
        xp_for_next_level,
        percent,
    }
}

/// Stored totals are never negative; anything below zero reads as zero.
pub fn xp_from_stored(total_xp: i64) -> u64 {
    u64::try_from(total_xp).unwrap_or(0)
}
