//! Domain model for per-guild experience settings.
//!
//! The engine only reads this model. It is persisted by the settings
//! repository, and a guild that never saved settings gets `defaults`.

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::DbErr;

use crate::server::{error::experience::ExperienceError, model::experience::XpSource};

#[derive(Debug, Clone, PartialEq)]
pub struct GuildExperienceConfig {
    pub guild_id: u64,
    /// Master switch for the whole experience system in the guild.
    pub enabled: bool,
    pub message_enabled: bool,
    pub command_enabled: bool,
    pub role_enabled: bool,
    pub voice_enabled: bool,
    /// Inclusive range for per-message XP.
    pub message_xp_min: i64,
    pub message_xp_max: i64,
    pub command_xp_base: i64,
    pub role_xp_amount: i64,
    /// XP per elapsed voice interval.
    pub voice_xp_amount: i64,
    pub message_cooldown: TimeDelta,
    pub command_cooldown: TimeDelta,
    pub role_cooldown: TimeDelta,
    pub voice_cooldown: TimeDelta,
    pub level_up_messages_enabled: bool,
    /// Fixed announcement channel; `None` announces where the activity happened.
    pub level_up_channel_id: Option<u64>,
}

impl GuildExperienceConfig {
    /// Settings of a guild that never saved any.
    pub fn defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            enabled: true,
            message_enabled: true,
            command_enabled: true,
            role_enabled: true,
            voice_enabled: true,
            message_xp_min: 15,
            message_xp_max: 25,
            command_xp_base: 10,
            role_xp_amount: 50,
            voice_xp_amount: 5,
            message_cooldown: TimeDelta::seconds(60),
            command_cooldown: TimeDelta::seconds(30),
            role_cooldown: TimeDelta::zero(),
            voice_cooldown: TimeDelta::seconds(50),
            level_up_messages_enabled: true,
            level_up_channel_id: None,
        }
    }

    /// Converts an entity model to a config domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildExperienceConfig)` - The converted domain model
    /// - `Err(DbErr::Custom)` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::guild_experience_config::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        let level_up_channel_id = entity
            .level_up_channel_id
            .map(|id| id.parse::<u64>())
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse level_up_channel_id: {}", e)))?;

        Ok(Self {
            guild_id,
            enabled: entity.enabled,
            message_enabled: entity.message_enabled,
            command_enabled: entity.command_enabled,
            role_enabled: entity.role_enabled,
            voice_enabled: entity.voice_enabled,
            message_xp_min: entity.message_xp_min,
            message_xp_max: entity.message_xp_max,
            command_xp_base: entity.command_xp_base,
            role_xp_amount: entity.role_xp_amount,
            voice_xp_amount: entity.voice_xp_amount,
            message_cooldown: cooldown_from_seconds(entity.message_cooldown),
            command_cooldown: cooldown_from_seconds(entity.command_cooldown),
            role_cooldown: cooldown_from_seconds(entity.role_cooldown),
            voice_cooldown: cooldown_from_seconds(entity.voice_cooldown),
            level_up_messages_enabled: entity.level_up_messages_enabled,
            level_up_channel_id,
        })
    }

    /// Converts the domain model into an entity model for persistence.
    pub fn into_entity(self, updated_at: DateTime<Utc>) -> entity::guild_experience_config::Model {
        entity::guild_experience_config::Model {
            guild_id: self.guild_id.to_string(),
            enabled: self.enabled,
            message_enabled: self.message_enabled,
            command_enabled: self.command_enabled,
            role_enabled: self.role_enabled,
            voice_enabled: self.voice_enabled,
            message_xp_min: self.message_xp_min,
            message_xp_max: self.message_xp_max,
            command_xp_base: self.command_xp_base,
            role_xp_amount: self.role_xp_amount,
            voice_xp_amount: self.voice_xp_amount,
            message_cooldown: self.message_cooldown.num_seconds(),
            command_cooldown: self.command_cooldown.num_seconds(),
            role_cooldown: self.role_cooldown.num_seconds(),
            voice_cooldown: self.voice_cooldown.num_seconds(),
            level_up_messages_enabled: self.level_up_messages_enabled,
            level_up_channel_id: self.level_up_channel_id.map(|id| id.to_string()),
            updated_at,
        }
    }

    /// Whether `source` currently awards XP in this guild.
    pub fn accepts(&self, source: XpSource) -> bool {
        self.enabled
            && match source {
                XpSource::Message => self.message_enabled,
                XpSource::Command => self.command_enabled,
                XpSource::Role => self.role_enabled,
                XpSource::Voice => self.voice_enabled,
            }
    }

    /// Minimum time between two awards from `source` for one member.
    pub fn cooldown(&self, source: XpSource) -> TimeDelta {
        match source {
            XpSource::Message => self.message_cooldown,
            XpSource::Command => self.command_cooldown,
            XpSource::Role => self.role_cooldown,
            XpSource::Voice => self.voice_cooldown,
        }
    }

    /// Rejects settings that could produce negative XP.
    ///
    /// # Returns
    /// - `Ok(())` - Amounts are non-negative and the message range is ordered
    /// - `Err(ExperienceError::Validation)` - Describes the first offending setting
    pub fn validate(&self) -> Result<(), ExperienceError> {
        if self.message_xp_min < 0 || self.message_xp_max < self.message_xp_min {
            return Err(ExperienceError::Validation(format!(
                "Invalid message XP range {}..={} for guild {}",
                self.message_xp_min, self.message_xp_max, self.guild_id
            )));
        }

        let amounts = [
            ("command_xp_base", self.command_xp_base),
            ("role_xp_amount", self.role_xp_amount),
            ("voice_xp_amount", self.voice_xp_amount),
        ];
        if let Some((name, value)) = amounts.iter().find(|(_, value)| *value < 0) {
            return Err(ExperienceError::Validation(format!(
                "Negative {} ({}) for guild {}",
                name, value, self.guild_id
            )));
        }

        Ok(())
    }
}

/// Stored cooldowns beyond `TimeDelta`'s range saturate instead of panicking.
fn cooldown_from_seconds(seconds: i64) -> TimeDelta {
    TimeDelta::try_seconds(seconds).unwrap_or(TimeDelta::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_guild_accepts_no_source() {
        let config = GuildExperienceConfig {
            enabled: false,
            ..GuildExperienceConfig::defaults(1)
        };

        assert!(XpSource::ALL.iter().all(|s| !config.accepts(*s)));
    }

    #[test]
    fn disabled_source_only_affects_itself() {
        let config = GuildExperienceConfig {
            voice_enabled: false,
            ..GuildExperienceConfig::defaults(1)
        };

        assert!(!config.accepts(XpSource::Voice));
        assert!(config.accepts(XpSource::Message));
        assert!(config.accepts(XpSource::Command));
        assert!(config.accepts(XpSource::Role));
    }

    #[test]
    fn rejects_inverted_message_range() {
        let config = GuildExperienceConfig {
            message_xp_min: 30,
            message_xp_max: 10,
            ..GuildExperienceConfig::defaults(1)
        };

        assert!(matches!(
            config.validate(),
            Err(ExperienceError::Validation(_))
        ));
    }

    #[test]
    fn rejects_negative_amount() {
        let config = GuildExperienceConfig {
            role_xp_amount: -5,
            ..GuildExperienceConfig::defaults(1)
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(GuildExperienceConfig::defaults(1).validate().is_ok());
    }
}
