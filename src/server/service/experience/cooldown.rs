//! Per-source cooldown enforcement.
//!
//! Eligibility is decided from the cooldown timestamp stored on the experience
//! record. The timestamp is only advanced by a committed award, so a failed
//! write never consumes a member's window. The award write repeats this check
//! in its `UPDATE` filter, so two racing awards cannot both pass one window;
//! `is_eligible` answers the same question for read-only callers.

use chrono::{DateTime, TimeDelta, Utc};

use crate::server::model::experience::{UserExperience, XpSource};

/// Whether an award from `source` is allowed at `now`.
///
/// Eligible when the member has no record, has never been awarded from
/// `source`, or at least `cooldown` has passed since the last award.
///
/// # Arguments
/// - `record` - Current experience record, if the member has one
/// - `source` - Activity source of the pending award
/// - `now` - Moment of the pending award
/// - `cooldown` - Minimum gap between two awards from `source`
pub fn is_eligible(
    record: Option<&UserExperience>,
    source: XpSource,
    now: DateTime<Utc>,
    cooldown: TimeDelta,
) -> bool {
    match record.and_then(|r| r.last_award_at(source)) {
        None => true,
        Some(last) => now.signed_duration_since(last) >= cooldown,
    }
}
