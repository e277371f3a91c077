//! Guild experience config repository.
//!
//! Stores the per-guild settings the experience engine reads. A guild without a
//! stored row is served the defaults, so nothing has to be written before the
//! first award.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter,
};

use crate::server::model::guild_config::GuildExperienceConfig;

pub struct GuildExperienceConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildExperienceConfigRepository<'a> {
    /// Creates a new GuildExperienceConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored settings of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildExperienceConfig))` - Settings were saved for the guild
    /// - `Ok(None)` - The guild never saved settings
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64) -> Result<Option<GuildExperienceConfig>, DbErr> {
        let entity = entity::prelude::GuildExperienceConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(GuildExperienceConfig::from_entity).transpose()
    }

    /// Gets the settings of a guild, falling back to defaults.
    pub async fn get_or_default(&self, guild_id: u64) -> Result<GuildExperienceConfig, DbErr> {
        Ok(self
            .get(guild_id)
            .await?
            .unwrap_or_else(|| GuildExperienceConfig::defaults(guild_id)))
    }

    /// Creates or replaces the settings of a guild.
    ///
    /// # Arguments
    /// - `config` - Complete settings to store
    ///
    /// # Returns
    /// - `Ok(GuildExperienceConfig)` - The stored settings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        config: GuildExperienceConfig,
    ) -> Result<GuildExperienceConfig, DbErr> {
        let exists = entity::prelude::GuildExperienceConfig::find_by_id(config.guild_id.to_string())
            .one(self.db)
            .await?
            .is_some();

        let active = config
            .into_entity(Utc::now())
            .into_active_model()
            .reset_all();

        let entity = if exists {
            active.update(self.db).await?
        } else {
            active.insert(self.db).await?
        };

        GuildExperienceConfig::from_entity(entity)
    }

    /// Deletes the settings of a guild.
    ///
    /// # Returns
    /// - `Ok(())` - Settings deleted (or none existed)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::GuildExperienceConfig::delete_many()
            .filter(entity::guild_experience_config::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
