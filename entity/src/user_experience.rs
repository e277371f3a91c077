use sea_orm::entity::prelude::*;

/// One experience record per guild member.
///
/// Discord snowflakes are stored as strings. Level is never stored, it is
/// derived from `total_xp`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub total_xp: i64,
    pub messages_sent: i64,
    pub commands_used: i64,
    pub roles_earned: i64,
    pub voice_minutes: i64,
    pub last_message_at: Option<DateTimeUtc>,
    pub last_command_at: Option<DateTimeUtc>,
    pub last_role_at: Option<DateTimeUtc>,
    pub last_voice_at: Option<DateTimeUtc>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
