//! User experience factory for creating test experience records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test experience records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_experience::UserExperienceFactory;
///
/// let record = UserExperienceFactory::new(&db)
///     .guild_id("100")
///     .user_id("42")
///     .total_xp(500)
///     .build()
///     .await?;
/// ```
pub struct UserExperienceFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    total_xp: i64,
    messages_sent: i64,
    last_message_at: Option<DateTime<Utc>>,
}

impl<'a> UserExperienceFactory<'a> {
    /// Creates a new UserExperienceFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"987654321"`
    /// - user_id: auto-incremented
    /// - total_xp: `0`
    /// - all counters `0`, no cooldown timestamps
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: "987654321".to_string(),
            user_id: next_id().to_string(),
            total_xp: 0,
            messages_sent: 0,
            last_message_at: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn total_xp(mut self, total_xp: i64) -> Self {
        self.total_xp = total_xp;
        self
    }

    pub fn messages_sent(mut self, messages_sent: i64) -> Self {
        self.messages_sent = messages_sent;
        self
    }

    /// Sets the last message award timestamp, putting the record on message cooldown.
    pub fn last_message_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_message_at = at;
        self
    }

    /// Builds and inserts the experience record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_experience::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_experience::Model, DbErr> {
        entity::user_experience::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            total_xp: ActiveValue::Set(self.total_xp),
            messages_sent: ActiveValue::Set(self.messages_sent),
            commands_used: ActiveValue::Set(0),
            roles_earned: ActiveValue::Set(0),
            voice_minutes: ActiveValue::Set(0),
            last_message_at: ActiveValue::Set(self.last_message_at),
            last_command_at: ActiveValue::Set(None),
            last_role_at: ActiveValue::Set(None),
            last_voice_at: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an experience record in the given guild with the given total.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `user_id` - Discord user ID as string
/// - `total_xp` - Cumulative XP for the record
pub async fn create_user_experience(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    total_xp: i64,
) -> Result<entity::user_experience::Model, DbErr> {
    UserExperienceFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .total_xp(total_xp)
        .build()
        .await
}
