use sea_orm::entity::prelude::*;

/// Per-guild experience settings.
///
/// Cooldowns are stored in seconds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_experience_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub enabled: bool,
    pub message_enabled: bool,
    pub command_enabled: bool,
    pub role_enabled: bool,
    pub voice_enabled: bool,
    pub message_xp_min: i64,
    pub message_xp_max: i64,
    pub command_xp_base: i64,
    pub role_xp_amount: i64,
    pub voice_xp_amount: i64,
    pub message_cooldown: i64,
    pub command_cooldown: i64,
    pub role_cooldown: i64,
    pub voice_cooldown: i64,
    pub level_up_messages_enabled: bool,
    pub level_up_channel_id: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
