use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserExperience::Table)
                    .if_not_exists()
                    .col(string(UserExperience::GuildId))
                    .col(string(UserExperience::UserId))
                    .col(big_integer(UserExperience::TotalXp).default(0))
                    .col(big_integer(UserExperience::MessagesSent).default(0))
                    .col(big_integer(UserExperience::CommandsUsed).default(0))
                    .col(big_integer(UserExperience::RolesEarned).default(0))
                    .col(big_integer(UserExperience::VoiceMinutes).default(0))
                    .col(timestamp_null(UserExperience::LastMessageAt))
                    .col(timestamp_null(UserExperience::LastCommandAt))
                    .col(timestamp_null(UserExperience::LastRoleAt))
                    .col(timestamp_null(UserExperience::LastVoiceAt))
                    .col(timestamp(UserExperience::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserExperience::GuildId)
                            .col(UserExperience::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Leaderboard reads scan one guild ordered by XP
        manager
            .create_index(
                Index::create()
                    .name("idx_user_experience_guild_total_xp")
                    .table(UserExperience::Table)
                    .col(UserExperience::GuildId)
                    .col(UserExperience::TotalXp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_experience_guild_total_xp")
                    .table(UserExperience::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserExperience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserExperience {
    Table,
    GuildId,
    UserId,
    TotalXp,
    MessagesSent,
    CommandsUsed,
    RolesEarned,
    VoiceMinutes,
    LastMessageAt,
    LastCommandAt,
    LastRoleAt,
    LastVoiceAt,
    UpdatedAt,
}
