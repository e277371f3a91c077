//! Guild experience config fixtures for creating in-memory test data.
//!
//! The defaults mirror the column defaults of the `guild_experience_config`
//! migration so a fixture behaves like a guild that never changed a setting.

use chrono::{DateTime, Utc};
use entity::guild_experience_config;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

pub const DEFAULT_MESSAGE_XP_MIN: i64 = 15;
pub const DEFAULT_MESSAGE_XP_MAX: i64 = 25;
pub const DEFAULT_COMMAND_XP_BASE: i64 = 10;
pub const DEFAULT_ROLE_XP_AMOUNT: i64 = 50;
pub const DEFAULT_VOICE_XP_AMOUNT: i64 = 5;

/// Default cooldowns in seconds.
pub const DEFAULT_MESSAGE_COOLDOWN: i64 = 60;
pub const DEFAULT_COMMAND_COOLDOWN: i64 = 30;
pub const DEFAULT_ROLE_COOLDOWN: i64 = 0;
pub const DEFAULT_VOICE_COOLDOWN: i64 = 50;

/// Creates a guild experience config entity model with default values.
///
/// # Returns
/// - `guild_experience_config::Model` - In-memory config entity, every source enabled
pub fn entity() -> guild_experience_config::Model {
    entity_builder().build()
}

/// Creates a guild experience config entity builder for customization.
pub fn entity_builder() -> GuildExperienceConfigEntityBuilder {
    GuildExperienceConfigEntityBuilder::default()
}

/// Builder for creating customized guild experience config entity models.
pub struct GuildExperienceConfigEntityBuilder {
    model: guild_experience_config::Model,
}

impl Default for GuildExperienceConfigEntityBuilder {
    fn default() -> Self {
        Self {
            model: guild_experience_config::Model {
                guild_id: DEFAULT_GUILD_ID.to_string(),
                enabled: true,
                message_enabled: true,
                command_enabled: true,
                role_enabled: true,
                voice_enabled: true,
                message_xp_min: DEFAULT_MESSAGE_XP_MIN,
                message_xp_max: DEFAULT_MESSAGE_XP_MAX,
                command_xp_base: DEFAULT_COMMAND_XP_BASE,
                role_xp_amount: DEFAULT_ROLE_XP_AMOUNT,
                voice_xp_amount: DEFAULT_VOICE_XP_AMOUNT,
                message_cooldown: DEFAULT_MESSAGE_COOLDOWN,
                command_cooldown: DEFAULT_COMMAND_COOLDOWN,
                role_cooldown: DEFAULT_ROLE_COOLDOWN,
                voice_cooldown: DEFAULT_VOICE_COOLDOWN,
                level_up_messages_enabled: true,
                level_up_channel_id: None,
                updated_at: DateTime::<Utc>::UNIX_EPOCH,
            },
        }
    }
}

impl GuildExperienceConfigEntityBuilder {
    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    /// Sets the guild-wide enable flag.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.model.enabled = enabled;
        self
    }

    pub fn message_enabled(mut self, enabled: bool) -> Self {
        self.model.message_enabled = enabled;
        self
    }

    pub fn command_enabled(mut self, enabled: bool) -> Self {
        self.model.command_enabled = enabled;
        self
    }

    pub fn role_enabled(mut self, enabled: bool) -> Self {
        self.model.role_enabled = enabled;
        self
    }

    pub fn voice_enabled(mut self, enabled: bool) -> Self {
        self.model.voice_enabled = enabled;
        self
    }

    /// Sets the inclusive message XP range.
    pub fn message_xp_range(mut self, min: i64, max: i64) -> Self {
        self.model.message_xp_min = min;
        self.model.message_xp_max = max;
        self
    }

    pub fn command_xp_base(mut self, base: i64) -> Self {
        self.model.command_xp_base = base;
        self
    }

    pub fn role_xp_amount(mut self, amount: i64) -> Self {
        self.model.role_xp_amount = amount;
        self
    }

    pub fn voice_xp_amount(mut self, amount: i64) -> Self {
        self.model.voice_xp_amount = amount;
        self
    }

    /// Sets the message cooldown in seconds.
    pub fn message_cooldown(mut self, seconds: i64) -> Self {
        self.model.message_cooldown = seconds;
        self
    }

    /// Sets the command cooldown in seconds.
    pub fn command_cooldown(mut self, seconds: i64) -> Self {
        self.model.command_cooldown = seconds;
        self
    }

    /// Sets the role cooldown in seconds.
    pub fn role_cooldown(mut self, seconds: i64) -> Self {
        self.model.role_cooldown = seconds;
        self
    }

    /// Sets the voice cooldown in seconds.
    pub fn voice_cooldown(mut self, seconds: i64) -> Self {
        self.model.voice_cooldown = seconds;
        self
    }

    pub fn level_up_messages_enabled(mut self, enabled: bool) -> Self {
        self.model.level_up_messages_enabled = enabled;
        self
    }

    pub fn level_up_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.model.level_up_channel_id = channel_id;
        self
    }

    /// Builds the in-memory entity model.
    pub fn build(self) -> guild_experience_config::Model {
        self.model
    }
}
