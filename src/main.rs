mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    bot, config::Config, error::AppError, router, scheduler::voice_ticks,
    service::{
        experience::{emitter::LevelUpEmitter, ExperienceService},
        level_up::LevelUpNotifier,
        voice::VoicePresence,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let (emitter, level_ups) = LevelUpEmitter::channel();
    let experience = ExperienceService::new(db.clone(), emitter, config.award_timeout);
    let presence = VoicePresence::new();

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), experience.clone(), presence.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Announce level-ups using the bot's HTTP client
    let notifier = LevelUpNotifier::new(db.clone(), discord_http);
    tokio::spawn(notifier.run(level_ups));

    // Start voice tick scheduler
    voice_ticks::start_scheduler(experience.clone(), presence).await?;

    let app = router::router().with_state(AppState::new(experience));

    let listener = tokio::net::TcpListener::bind(&config.api_bind_address).await?;
    tracing::info!("HTTP API listening on {}", config.api_bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
