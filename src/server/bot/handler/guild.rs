//! Guild removal handling.
//!
//! `guild_delete` fires both when the bot is removed from a guild and when a
//! guild becomes unavailable during a Discord outage. Only the former deletes
//! the guild's experience records and settings.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::server::{
    data::guild_config::GuildExperienceConfigRepository,
    service::{experience::ExperienceService, voice::VoicePresence},
};

/// Handles the guild_delete event
///
/// # Arguments
/// - `db` - Database connection for deleting the guild settings
/// - `experience` - Experience engine removing the guild's records
/// - `presence` - Voice presence to clear for the guild
/// - `incomplete` - Guild ID and whether the guild merely became unavailable
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    experience: &ExperienceService,
    presence: &VoicePresence,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    presence.clear_guild(guild_id).await;

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    if let Err(e) = experience.remove_guild(guild_id).await {
        tracing::error!("Failed to remove experience of guild {}: {}", guild_id, e);
    }

    if let Err(e) = GuildExperienceConfigRepository::new(db).delete(guild_id).await {
        tracing::error!(
            "Failed to remove experience settings of guild {}: {:?}",
            guild_id,
            e
        );
    } else {
        tracing::info!("Bot left guild {}, experience data removed", guild_id);
    }
}
