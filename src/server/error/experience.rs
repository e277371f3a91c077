use std::time::Duration;

use thiserror::Error;

/// Failures of the experience engine.
///
/// Disabled sources and active cooldowns are not errors; `award` reports
/// them as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ExperienceError {
    /// The award write failed and nothing was committed.
    ///
    /// No XP, counter or cooldown change is visible afterwards and no
    /// level-up was emitted. The caller decides whether to retry.
    #[error("Failed to persist experience award: {0}")]
    Persistence(#[source] sea_orm::DbErr),

    /// The award, settings read included, did not finish within the
    /// configured timeout.
    ///
    /// Any open transaction was dropped and rolled back, so this behaves
    /// exactly like `Persistence`.
    #[error("Experience award timed out after {0:?}")]
    Timeout(Duration),

    /// Programmer error such as an unknown source name or an invalid guild config.
    #[error("{0}")]
    Validation(String),

    /// A read-only query (config, leaderboard, rank, profile) failed.
    #[error("Failed to read experience data: {0}")]
    Read(#[source] sea_orm::DbErr),
}

impl ExperienceError {
    /// True for the failures that abort an award without committing it.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Timeout(_))
    }
}
