//! Domain models for the experience engine.
//!
//! Covers the persisted experience record, the activity sources that award
//! XP, the per-call award context and the results and facts produced by an
//! award.

use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::DbErr;

use crate::{
    model::experience::{LeaderboardEntryDto, ProgressDto, RankDto},
    server::{
        error::experience::ExperienceError,
        service::experience::formula::{self, LevelProgress},
    },
};

/// Activity category that generates experience.
///
/// Every source has its own counter and its own cooldown clock per guild member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XpSource {
    Message,
    Command,
    Role,
    Voice,
}

impl XpSource {
    pub const ALL: [XpSource; 4] = [
        XpSource::Message,
        XpSource::Command,
        XpSource::Role,
        XpSource::Voice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Command => "command",
            Self::Role => "role",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for XpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for XpSource {
    type Err = ExperienceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "message" => Ok(Self::Message),
            "command" => Ok(Self::Command),
            "role" => Ok(Self::Role),
            "voice" => Ok(Self::Voice),
            other => Err(ExperienceError::Validation(format!(
                "Unknown experience source '{}'",
                other
            ))),
        }
    }
}

/// Experience record of one member in one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct UserExperience {
    pub guild_id: u64,
    pub user_id: u64,
    /// Cumulative XP, never negative.
    pub total_xp: i64,
    pub messages_sent: i64,
    pub commands_used: i64,
    pub roles_earned: i64,
    pub voice_minutes: i64,
    pub last_message_at: Option<DateTime<Utc>>,
    pub last_command_at: Option<DateTime<Utc>>,
    pub last_role_at: Option<DateTime<Utc>>,
    pub last_voice_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl UserExperience {
    /// Converts an entity model to an experience domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(UserExperience)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::user_experience::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        Ok(Self {
            guild_id,
            user_id,
            total_xp: entity.total_xp,
            messages_sent: entity.messages_sent,
            commands_used: entity.commands_used,
            roles_earned: entity.roles_earned,
            voice_minutes: entity.voice_minutes,
            last_message_at: entity.last_message_at,
            last_command_at: entity.last_command_at,
            last_role_at: entity.last_role_at,
            last_voice_at: entity.last_voice_at,
            updated_at: entity.updated_at,
        })
    }

    /// Timestamp of the last award granted from `source`, if any.
    pub fn last_award_at(&self, source: XpSource) -> Option<DateTime<Utc>> {
        match source {
            XpSource::Message => self.last_message_at,
            XpSource::Command => self.last_command_at,
            XpSource::Role => self.last_role_at,
            XpSource::Voice => self.last_voice_at,
        }
    }

    /// Activity counter belonging to `source`.
    pub fn counter(&self, source: XpSource) -> i64 {
        match source {
            XpSource::Message => self.messages_sent,
            XpSource::Command => self.commands_used,
            XpSource::Role => self.roles_earned,
            XpSource::Voice => self.voice_minutes,
        }
    }
}

/// Per-call information supplied by the event layer alongside an award.
#[derive(Debug, Clone)]
pub struct AwardContext {
    /// Moment the activity happened; drives cooldowns and `updated_at`.
    pub at: DateTime<Utc>,
    /// Channel the activity happened in, used to place level-up announcements.
    pub channel_id: Option<u64>,
    /// Multiplier for command XP.
    pub weight: i64,
    /// Number of elapsed voice intervals (minutes) covered by a voice award.
    pub ticks: i64,
}

impl AwardContext {
    /// Context for an activity happening at `at`.
    pub fn at(at: DateTime<Utc>) -> Self {
        Self {
            at,
            channel_id: None,
            weight: 1,
            ticks: 1,
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn in_channel(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_ticks(mut self, ticks: i64) -> Self {
        self.ticks = ticks;
        self
    }
}

impl Default for AwardContext {
    fn default() -> Self {
        Self::now()
    }
}

/// Parameters for atomically applying one award to a record.
///
/// The record is created when absent; `total_xp` grows by `delta`, the source
/// counter by `count`, and the source cooldown timestamp plus `updated_at`
/// are set to `at`. Nothing changes unless the last award from `source` is at
/// least `cooldown` before `at`.
#[derive(Debug, Clone)]
pub struct ApplyAwardParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub source: XpSource,
    pub delta: i64,
    pub count: i64,
    pub at: DateTime<Utc>,
    pub cooldown: TimeDelta,
}

/// Outcome of an award that was granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardResult {
    pub delta: i64,
    pub total_xp: i64,
    pub level_after: u64,
    pub leveled_up: bool,
}

/// A member crossed one or more level thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub guild_id: u64,
    pub user_id: u64,
    /// Channel of the triggering activity, if it had one.
    pub channel_id: Option<u64>,
    pub level_before: u64,
    pub level_after: u64,
    pub total_xp: i64,
}

/// One row of a guild leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position in the guild ordering.
    pub position: u64,
    pub user_id: u64,
    pub total_xp: i64,
}

/// Position of a member in the guild ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Ranked { position: u64, total_users: u64 },
    /// The member has no experience record in the guild.
    Unranked,
}

impl LeaderboardEntry {
    /// Converts the leaderboard row to a DTO for API responses.
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            position: self.position,
            user_id: self.user_id,
            total_xp: self.total_xp,
            level: formula::level_for_xp(formula::xp_from_stored(self.total_xp)),
        }
    }
}

impl Rank {
    /// Converts the rank to a DTO for API responses.
    pub fn into_dto(self, guild_id: u64, user_id: u64) -> RankDto {
        let (position, total_users) = match self {
            Rank::Ranked {
                position,
                total_users,
            } => (Some(position), Some(total_users)),
            Rank::Unranked => (None, None),
        };

        RankDto {
            guild_id,
            user_id,
            ranked: position.is_some(),
            position,
            total_users,
        }
    }
}

/// Profile of a member as shown by `/level` and the progress endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStanding {
    /// `None` when the member never received XP in the guild.
    pub record: Option<UserExperience>,
    pub total_xp: u64,
    pub progress: LevelProgress,
    pub rank: Rank,
}

impl MemberStanding {
    /// Activity counter of the member, zero without a record.
    pub fn counter(&self, source: XpSource) -> i64 {
        self.record.as_ref().map(|r| r.counter(source)).unwrap_or(0)
    }

    /// Converts the standing to a DTO for API responses.
    pub fn into_dto(self, guild_id: u64, user_id: u64) -> ProgressDto {
        ProgressDto {
            guild_id,
            user_id,
            total_xp: self.total_xp,
            level: self.progress.level,
            xp_into_level: self.progress.xp_into_level,
            xp_for_next_level: self.progress.xp_for_next_level,
            percent: self.progress.percent,
            messages_sent: self.counter(XpSource::Message),
            commands_used: self.counter(XpSource::Command),
            roles_earned: self.counter(XpSource::Role),
            voice_minutes: self.counter(XpSource::Voice),
            rank: self.rank.into_dto(guild_id, user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sources() {
        for source in XpSource::ALL {
            assert_eq!(source.as_str().parse::<XpSource>().unwrap(), source);
        }
    }

    #[test]
    fn rejects_unknown_source() {
        let result = "reaction".parse::<XpSource>();

        assert!(matches!(result, Err(ExperienceError::Validation(_))));
    }

    #[test]
    fn unranked_dto_has_no_position() {
        let dto = Rank::Unranked.into_dto(1, 2);

        assert!(!dto.ranked);
        assert_eq!(dto.position, None);
        assert_eq!(dto.total_users, None);
    }

    #[test]
    fn leaderboard_dto_carries_level() {
        let entry = LeaderboardEntry {
            position: 1,
            user_id: 42,
            total_xp: 300,
        };

        assert_eq!(entry.into_dto().level, 2);
    }

    #[test]
    fn standing_without_record_reports_zero_counters() {
        let standing = MemberStanding {
            record: None,
            total_xp: 0,
            progress: formula::progress(0),
            rank: Rank::Unranked,
        };

        let dto = standing.into_dto(1, 2);

        assert_eq!(dto.messages_sent, 0);
        assert_eq!(dto.voice_minutes, 0);
        assert_eq!(dto.level, 0);
        assert!(!dto.rank.ranked);
    }
}
