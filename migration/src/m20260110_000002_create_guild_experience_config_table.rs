use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildExperienceConfig::Table)
                    .if_not_exists()
                    .col(string(GuildExperienceConfig::GuildId).primary_key())
                    .col(boolean(GuildExperienceConfig::Enabled).default(true))
                    .col(boolean(GuildExperienceConfig::MessageEnabled).default(true))
                    .col(boolean(GuildExperienceConfig::CommandEnabled).default(true))
                    .col(boolean(GuildExperienceConfig::RoleEnabled).default(true))
                    .col(boolean(GuildExperienceConfig::VoiceEnabled).default(true))
                    .col(big_integer(GuildExperienceConfig::MessageXpMin).default(15))
                    .col(big_integer(GuildExperienceConfig::MessageXpMax).default(25))
                    .col(big_integer(GuildExperienceConfig::CommandXpBase).default(10))
                    .col(big_integer(GuildExperienceConfig::RoleXpAmount).default(50))
                    .col(big_integer(GuildExperienceConfig::VoiceXpAmount).default(5))
                    .col(big_integer(GuildExperienceConfig::MessageCooldown).default(60))
                    .col(big_integer(GuildExperienceConfig::CommandCooldown).default(30))
                    .col(big_integer(GuildExperienceConfig::RoleCooldown).default(0))
                    .col(big_integer(GuildExperienceConfig::VoiceCooldown).default(50))
                    .col(boolean(GuildExperienceConfig::LevelUpMessagesEnabled).default(true))
                    .col(string_null(GuildExperienceConfig::LevelUpChannelId))
                    .col(timestamp(GuildExperienceConfig::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildExperienceConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildExperienceConfig {
    Table,
    GuildId,
    Enabled,
    MessageEnabled,
    CommandEnabled,
    RoleEnabled,
    VoiceEnabled,
    MessageXpMin,
    MessageXpMax,
    CommandXpBase,
    RoleXpAmount,
    VoiceXpAmount,
    MessageCooldown,
    CommandCooldown,
    RoleCooldown,
    VoiceCooldown,
    LevelUpMessagesEnabled,
    LevelUpChannelId,
    UpdatedAt,
}
