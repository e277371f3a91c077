//! Level-up announcements.
//!
//! The experience engine only emits `LevelUp` facts. `LevelUpNotifier` drains
//! them on its own task and posts an embed to the guild's configured
//! announcement channel, or to the channel the activity happened in. A failed
//! post is logged and never affects the award that caused it.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp},
    http::Http,
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    data::guild_config::GuildExperienceConfigRepository,
    error::AppError,
    model::{experience::LevelUp, guild_config::GuildExperienceConfig},
};

/// Embed colour of level-up announcements.
const LEVEL_UP_COLOR: u32 = 0xF1C40F;

pub struct LevelUpNotifier {
    db: DatabaseConnection,
    http: Arc<Http>,
}

impl LevelUpNotifier {
    /// Creates a new LevelUpNotifier.
    ///
    /// # Arguments
    /// - `db` - Database connection for reading guild settings
    /// - `http` - Discord HTTP client shared with the bot
    pub fn new(db: DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Announces level-ups until every emitter is dropped.
    pub async fn run(self, mut receiver: UnboundedReceiver<LevelUp>) {
        tracing::info!("Level-up notifier started");

        while let Some(fact) = receiver.recv().await {
            if let Err(e) = self.notify(&fact).await {
                tracing::error!(
                    "Failed to announce level {} of user {} in guild {}: {}",
                    fact.level_after,
                    fact.user_id,
                    fact.guild_id,
                    e
                );
            }
        }

        tracing::info!("Level-up notifier stopped");
    }

    async fn notify(&self, fact: &LevelUp) -> Result<(), AppError> {
        let config = GuildExperienceConfigRepository::new(&self.db)
            .get_or_default(fact.guild_id)
            .await?;

        let Some(channel_id) = announcement_channel(&config, fact) else {
            tracing::debug!(
                "No announcement for level {} of user {} in guild {}",
                fact.level_after,
                fact.user_id,
                fact.guild_id
            );
            return Ok(());
        };

        let embed = build_level_up_embed(fact, chrono::Utc::now())?;
        let message = CreateMessage::new()
            .content(format!("<@{}>", fact.user_id))
            .embed(embed);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        tracing::debug!(
            "Announced level {} of user {} in channel {}",
            fact.level_after,
            fact.user_id,
            channel_id
        );

        Ok(())
    }
}

/// Channel a level-up is announced in.
///
/// # Returns
/// - `Some(channel_id)` - The configured channel, else the activity's channel
/// - `None` - Announcements are disabled or no channel is known
pub fn announcement_channel(config: &GuildExperienceConfig, fact: &LevelUp) -> Option<u64> {
    if !config.level_up_messages_enabled {
        return None;
    }

    config.level_up_channel_id.or(fact.channel_id)
}

/// Builds the announcement embed for a level-up.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting
/// - `Err(AppError::InternalError)` - `now` is not a valid Discord timestamp
pub fn build_level_up_embed(
    fact: &LevelUp,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<CreateEmbed, AppError> {
    let timestamp = Timestamp::from_unix_timestamp(now.timestamp()).map_err(|e| {
        AppError::InternalError(format!(
            "Invalid Discord timestamp {}: {}",
            now.timestamp(),
            e
        ))
    })?;

    Ok(CreateEmbed::new()
        .title("Level up!")
        .description(format!(
            "<@{}> reached **level {}**",
            fact.user_id, fact.level_after
        ))
        .color(LEVEL_UP_COLOR)
        .field("Previous level", fact.level_before.to_string(), true)
        .field("Total XP", fact.total_xp.to_string(), true)
        .footer(CreateEmbedFooter::new("Keep chatting to climb the leaderboard"))
        .timestamp(timestamp))
}
