//! Experience & leveling engine.
//!
//! `ExperienceService` is constructed once at startup and cloned into every
//! caller (bot handler, voice tick job, HTTP state). It turns activity into XP,
//! enforces per-source cooldowns, detects level-ups and answers leaderboard,
//! rank and progress queries.
//!
//! # Award path
//!
//! Steps 1 to 3 together are bounded by `award_timeout`.
//!
//! 1. Read the guild settings; a disabled guild or source is a silent no-op.
//! 2. Compute the XP delta for the source.
//! 3. In one transaction: insert the record if absent, then increment it in
//!    place with an `UPDATE` that only matches while the source cooldown has
//!    elapsed, and commit. No matching row means the member is on cooldown.
//! 4. Compare levels before and after and emit a `LevelUp` fact on increase.
//!
//! Any failure or timeout in step 3 rolls the transaction back: no XP, counter
//! or cooldown change and no level-up.

pub mod cooldown;
pub mod emitter;
pub mod formula;
pub mod leaderboard;

#[cfg(test)]
mod test;

use std::time::Duration;

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{experience::ExperienceRepository, guild_config::GuildExperienceConfigRepository},
    error::experience::ExperienceError,
    model::{
        experience::{
            ApplyAwardParam, AwardContext, AwardResult, LeaderboardEntry, LevelUp,
            MemberStanding, Rank, UserExperience, XpSource,
        },
        guild_config::GuildExperienceConfig,
    },
};

use self::emitter::LevelUpEmitter;

/// Default bound on an award, from the settings read to the commit.
pub const DEFAULT_AWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest page `get_leaderboard` returns.
pub const MAX_LEADERBOARD_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct ExperienceService {
    db: DatabaseConnection,
    emitter: LevelUpEmitter,
    award_timeout: Duration,
}

impl ExperienceService {
    /// Creates the engine.
    ///
    /// # Arguments
    /// - `db` - Database connection pool holding experience records and guild settings
    /// - `emitter` - Where level-up facts are delivered
    /// - `award_timeout` - Bound on one award, settings read included
    pub fn new(db: DatabaseConnection, emitter: LevelUpEmitter, award_timeout: Duration) -> Self {
        Self {
            db,
            emitter,
            award_timeout,
        }
    }

    /// Awards experience for one activity.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the activity happened in
    /// - `user_id` - Member who performed the activity
    /// - `source` - Activity category
    /// - `context` - Timestamp, channel, command weight and voice ticks
    ///
    /// # Returns
    /// - `Ok(Some(AwardResult))` - XP was granted and committed
    /// - `Ok(None)` - Experience or the source is disabled, or the source is on cooldown
    /// - `Err(ExperienceError::Persistence | Timeout)` - Nothing was committed
    /// - `Err(ExperienceError::Validation)` - The guild settings are invalid
    /// - `Err(ExperienceError::Read)` - The guild settings could not be read
    pub async fn award(
        &self,
        guild_id: u64,
        user_id: u64,
        source: XpSource,
        context: AwardContext,
    ) -> Result<Option<AwardResult>, ExperienceError> {
        let granted = match tokio::time::timeout(
            self.award_timeout,
            self.try_award(guild_id, user_id, source, &context),
        )
        .await
        {
            Ok(granted) => granted?,
            Err(_) => {
                tracing::error!(
                    "{} award for user {} in guild {} timed out after {:?}",
                    source,
                    user_id,
                    guild_id,
                    self.award_timeout
                );
                return Err(ExperienceError::Timeout(self.award_timeout));
            }
        };

        let Some((record, delta)) = granted else {
            return Ok(None);
        };

        let total_xp = formula::xp_from_stored(record.total_xp);
        let level_before = formula::level_for_xp(total_xp.saturating_sub(delta as u64));
        let level_after = formula::level_for_xp(total_xp);
        let leveled_up = level_after > level_before;

        tracing::debug!(
            "Awarded {} {} XP to user {} in guild {} (total {}, level {})",
            delta,
            source,
            user_id,
            guild_id,
            record.total_xp,
            level_after
        );

        if leveled_up {
            tracing::info!(
                "User {} reached level {} in guild {}",
                user_id,
                level_after,
                guild_id
            );
            self.emitter.emit(LevelUp {
                guild_id,
                user_id,
                channel_id: context.channel_id,
                level_before,
                level_after,
                total_xp: record.total_xp,
            });
        }

        Ok(Some(AwardResult {
            delta,
            total_xp: record.total_xp,
            level_after,
            leveled_up,
        }))
    }

    /// Steps of an award that touch the database.
    ///
    /// Returns the committed record and the applied delta, or `Ok(None)` when
    /// the guild, the source or the cooldown rules the award out.
    async fn try_award(
        &self,
        guild_id: u64,
        user_id: u64,
        source: XpSource,
        context: &AwardContext,
    ) -> Result<Option<(UserExperience, i64)>, ExperienceError> {
        let config = GuildExperienceConfigRepository::new(&self.db)
            .get_or_default(guild_id)
            .await
            .map_err(ExperienceError::Read)?;

        if !config.accepts(source) {
            tracing::debug!(
                "Experience source {} disabled in guild {}, skipping user {}",
                source,
                guild_id,
                user_id
            );
            return Ok(None);
        }

        let (delta, count) = compute_delta(&config, source, context)?;

        let param = ApplyAwardParam {
            guild_id,
            user_id,
            source,
            delta,
            count,
            at: context.at,
            cooldown: config.cooldown(source),
        };

        match self.commit_award(param).await {
            Ok(Some(record)) => Ok(Some((record, delta))),
            Ok(None) => {
                tracing::debug!(
                    "User {} in guild {} is on {} cooldown",
                    user_id,
                    guild_id,
                    source
                );
                Ok(None)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to persist {} award for user {} in guild {}: {}",
                    source,
                    user_id,
                    guild_id,
                    e
                );
                Err(ExperienceError::Persistence(e))
            }
        }
    }

    /// Applies the award in its own transaction.
    ///
    /// Returns `Ok(None)` when the cooldown blocks the award; the transaction
    /// is then dropped and the inserted placeholder, if any, rolled back.
    async fn commit_award(&self, param: ApplyAwardParam) -> Result<Option<UserExperience>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(record) = ExperienceRepository::new(&txn).apply_award(param).await? else {
            return Ok(None);
        };
        txn.commit().await?;

        Ok(Some(record))
    }

    /// Whether an award from `source` would currently pass the cooldown.
    ///
    /// Read-only, so the answer may be stale by the time an award is
    /// attempted.
    pub async fn is_eligible(
        &self,
        guild_id: u64,
        user_id: u64,
        source: XpSource,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool, ExperienceError> {
        let config = GuildExperienceConfigRepository::new(&self.db)
            .get_or_default(guild_id)
            .await
            .map_err(ExperienceError::Read)?;

        let record = ExperienceRepository::new(&self.db)
            .find(guild_id, user_id)
            .await
            .map_err(ExperienceError::Read)?;

        Ok(cooldown::is_eligible(
            record.as_ref(),
            source,
            now,
            config.cooldown(source),
        ))
    }

    /// Top of a guild's leaderboard.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to rank
    /// - `limit` - Number of rows, capped at `MAX_LEADERBOARD_LIMIT`
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Rows ordered by XP descending, then user ID ascending
    /// - `Err(ExperienceError::Read)` - Database error
    pub async fn get_leaderboard(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<LeaderboardEntry>, ExperienceError> {
        let standings = self.standings(guild_id).await?;
        let limit = limit.min(MAX_LEADERBOARD_LIMIT) as usize;

        Ok(leaderboard::top_entries(&standings, limit))
    }

    /// Position of a member among every ranked member of the guild.
    pub async fn get_rank(&self, guild_id: u64, user_id: u64) -> Result<Rank, ExperienceError> {
        let standings = self.standings(guild_id).await?;

        Ok(leaderboard::rank_of(&standings, user_id))
    }

    /// Record, level progress and rank of a member.
    ///
    /// A member without a record is reported at zero XP and unranked.
    pub async fn get_standing(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<MemberStanding, ExperienceError> {
        let record = ExperienceRepository::new(&self.db)
            .find(guild_id, user_id)
            .await
            .map_err(ExperienceError::Read)?;

        let total_xp = record
            .as_ref()
            .map(|r| formula::xp_from_stored(r.total_xp))
            .unwrap_or(0);

        let rank = self.get_rank(guild_id, user_id).await?;

        Ok(MemberStanding {
            record,
            total_xp,
            progress: formula::progress(total_xp),
            rank,
        })
    }

    /// Resets a member to zero XP by removing their record.
    ///
    /// # Returns
    /// - `Ok(true)` - The member had a record
    /// - `Ok(false)` - Nothing to reset
    pub async fn reset_user(&self, guild_id: u64, user_id: u64) -> Result<bool, ExperienceError> {
        let removed = ExperienceRepository::new(&self.db)
            .delete(guild_id, user_id)
            .await
            .map_err(ExperienceError::Persistence)?;

        if removed {
            tracing::info!("Reset experience of user {} in guild {}", user_id, guild_id);
        }

        Ok(removed)
    }

    /// Removes every experience record of a guild the bot left.
    pub async fn remove_guild(&self, guild_id: u64) -> Result<u64, ExperienceError> {
        let removed = ExperienceRepository::new(&self.db)
            .delete_by_guild(guild_id)
            .await
            .map_err(ExperienceError::Persistence)?;

        tracing::info!(
            "Removed {} experience records of guild {}",
            removed,
            guild_id
        );

        Ok(removed)
    }

    async fn standings(&self, guild_id: u64) -> Result<Vec<(u64, i64)>, ExperienceError> {
        let totals = ExperienceRepository::new(&self.db)
            .get_totals_by_guild(guild_id)
            .await
            .map_err(ExperienceError::Read)?;

        Ok(leaderboard::rank_standings(totals))
    }
}

/// XP delta and counter increment for one award.
///
/// Message XP is drawn uniformly from the configured inclusive range. Command
/// XP scales with the context weight, voice XP with the number of ticks; voice
/// counts one minute per tick.
fn compute_delta(
    config: &GuildExperienceConfig,
    source: XpSource,
    context: &AwardContext,
) -> Result<(i64, i64), ExperienceError> {
    config.validate()?;

    let delta = match source {
        XpSource::Message => {
            rand::rng().random_range(config.message_xp_min..=config.message_xp_max)
        }
        XpSource::Command => {
            if context.weight < 0 {
                return Err(ExperienceError::Validation(format!(
                    "Negative command weight {}",
                    context.weight
                )));
            }
            config.command_xp_base.saturating_mul(context.weight)
        }
        XpSource::Role => config.role_xp_amount,
        XpSource::Voice => {
            if context.ticks < 1 {
                return Err(ExperienceError::Validation(format!(
                    "Voice award needs at least one tick, got {}",
                    context.ticks
                )));
            }
            config.voice_xp_amount.saturating_mul(context.ticks)
        }
    };

    let count = match source {
        XpSource::Voice => context.ticks,
        _ => 1,
    };

    Ok((delta, count))
}
