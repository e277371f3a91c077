use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::server::{
    model::experience::{AwardContext, XpSource},
    service::experience::ExperienceService,
};

/// Handle message creation in a channel
///
/// Guild messages from non-bot authors earn message XP.
pub async fn handle_message(experience: &ExperienceService, _ctx: Context, message: Message) {
    // Only guild channels (not DMs) earn experience
    let Some(guild_id) = message.guild_id else {
        return;
    };

    if message.author.bot {
        return;
    }

    let context =
        AwardContext::at(message.timestamp.to_utc()).in_channel(message.channel_id.get());

    if let Err(e) = experience
        .award(
            guild_id.get(),
            message.author.id.get(),
            XpSource::Message,
            context,
        )
        .await
    {
        tracing::error!(
            "Failed to award message XP to user {} in guild {}: {}",
            message.author.id,
            guild_id,
            e
        );
    }
}
