//! Guild experience config factory for creating test config rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

use crate::fixture::guild_experience_config::{entity_builder, GuildExperienceConfigEntityBuilder};

/// Factory for inserting guild experience configs.
///
/// Wraps the fixture builder so every fixture setter is available before
/// insertion.
///
/// # Example
///
/// ```rust,ignore
/// let config = GuildExperienceConfigFactory::new(&db, "100")
///     .configure(|c| c.message_cooldown(0).message_xp_range(100, 100))
///     .build()
///     .await?;
/// ```
pub struct GuildExperienceConfigFactory<'a> {
    db: &'a DatabaseConnection,
    builder: GuildExperienceConfigEntityBuilder,
}

impl<'a> GuildExperienceConfigFactory<'a> {
    /// Creates a new factory for the given guild with fixture defaults.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            builder: entity_builder().guild_id(guild_id),
        }
    }

    /// Applies fixture builder setters.
    pub fn configure(
        mut self,
        f: impl FnOnce(GuildExperienceConfigEntityBuilder) -> GuildExperienceConfigEntityBuilder,
    ) -> Self {
        self.builder = f(self.builder);
        self
    }

    /// Builds and inserts the config entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_experience_config::Model)` - Created config entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_experience_config::Model, DbErr> {
        let mut model = self.builder.build();
        model.updated_at = Utc::now();

        model.into_active_model().reset_all().insert(self.db).await
    }
}

/// Creates a guild experience config with default values.
///
/// Shorthand for `GuildExperienceConfigFactory::new(db, guild_id).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_experience_config::Model, DbErr> {
    GuildExperienceConfigFactory::new(db, guild_id).build().await
}
