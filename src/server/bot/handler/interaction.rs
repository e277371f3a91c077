use dioxus_logger::tracing;
use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::server::{
    bot::command,
    model::experience::{AwardContext, XpSource},
    service::experience::ExperienceService,
};

/// Handles slash command interactions
///
/// Answers the command, then awards command XP to the invoker.
pub async fn handle_interaction_create(
    experience: &ExperienceService,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(guild_id) = command.guild_id else {
        let response = CreateInteractionResponseMessage::new()
            .content("Experience commands only work in servers.")
            .ephemeral(true);
        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await
        {
            tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
        }
        return;
    };

    let response = match command::run(experience, guild_id.get(), &command).await {
        Ok(Some(response)) => response,
        Ok(None) => {
            tracing::warn!("Received unknown command /{}", command.data.name);
            return;
        }
        Err(e) => {
            tracing::error!(
                "Command /{} failed in guild {}: {}",
                command.data.name,
                guild_id,
                e
            );
            CreateInteractionResponseMessage::new()
                .content("Something went wrong, please try again later.")
                .ephemeral(true)
        }
    };

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to respond to /{}: {:?}", command.data.name, e);
    }

    let context = AwardContext::now().in_channel(command.channel_id.get());
    if let Err(e) = experience
        .award(
            guild_id.get(),
            command.user.id.get(),
            XpSource::Command,
            context,
        )
        .await
    {
        tracing::error!(
            "Failed to award command XP to user {} in guild {}: {}",
            command.user.id,
            guild_id,
            e
        );
    }
}
