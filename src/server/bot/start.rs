use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::server::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    service::{experience::ExperienceService, voice::VoicePresence},
};

/// Builds the Discord client without connecting to the gateway.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection for guild settings cleanup
/// - `experience` - Experience engine shared with the HTTP API
/// - `presence` - Voice presence shared with the voice tick job
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client to start and its HTTP client for other services
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    experience: ExperienceService,
    presence: VoicePresence,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(db, experience, presence);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the client to the gateway.
///
/// Blocks until the bot shuts down, so it should run in its own task.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
