use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, guild_experience_config::GuildExperienceConfigFactory},
    fixture::guild_experience_config::GuildExperienceConfigEntityBuilder,
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::{
    data::experience::ExperienceRepository,
    error::{experience::ExperienceError, AppError},
    model::experience::{AwardContext, LevelUp, Rank, XpSource},
    service::experience::{
        emitter::LevelUpEmitter, formula, ExperienceService, DEFAULT_AWARD_TIMEOUT,
    },
};

mod leaderboard;
mod standing;

const GUILD: u64 = 100;

/// `t(s)` is `s` seconds after a fixed instant.
fn t(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap() + chrono::TimeDelta::seconds(seconds)
}

/// Engine connected to a fresh level-up channel.
fn service(db: &DatabaseConnection) -> (ExperienceService, UnboundedReceiver<LevelUp>) {
    let (emitter, receiver) = LevelUpEmitter::channel();
    (
        ExperienceService::new(db.clone(), emitter, DEFAULT_AWARD_TIMEOUT),
        receiver,
    )
}

/// Engine with a generous award timeout, for tests that queue many awards on
/// one database.
fn patient_service(db: &DatabaseConnection) -> ExperienceService {
    ExperienceService::new(
        db.clone(),
        LevelUpEmitter::disconnected(),
        Duration::from_secs(60),
    )
}

/// Stores guild settings for `GUILD`.
async fn configure(
    db: &DatabaseConnection,
    f: impl FnOnce(GuildExperienceConfigEntityBuilder) -> GuildExperienceConfigEntityBuilder,
) -> Result<(), AppError> {
    GuildExperienceConfigFactory::new(db, GUILD.to_string())
        .configure(f)
        .build()
        .await?;
    Ok(())
}
