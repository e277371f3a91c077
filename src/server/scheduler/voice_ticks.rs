use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    model::experience::{AwardContext, XpSource},
    service::{experience::ExperienceService, voice::VoicePresence},
};

/// Starts the voice tick scheduler
///
/// Every minute, each member tracked by `presence` receives one tick of voice
/// XP. The voice cooldown still applies, so a tick that fires early is skipped.
///
/// # Arguments
/// - `experience`: Experience engine awarding the XP
/// - `presence`: Members currently eligible for voice XP
pub async fn start_scheduler(
    experience: ExperienceService,
    presence: VoicePresence,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let experience = experience.clone();
        let presence = presence.clone();

        Box::pin(async move {
            let awarded = process_voice_ticks(&experience, &presence, Utc::now()).await;
            if awarded > 0 {
                tracing::debug!("Awarded voice XP to {} members", awarded);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Voice tick scheduler started");

    Ok(())
}

/// Awards one voice tick to every tracked member.
///
/// Failures are logged per member and do not stop the remaining awards.
///
/// # Returns
/// - Number of members who received XP
pub async fn process_voice_ticks(
    experience: &ExperienceService,
    presence: &VoicePresence,
    now: DateTime<Utc>,
) -> usize {
    let mut awarded = 0;

    for member in presence.snapshot().await {
        let context = AwardContext::at(now).in_channel(member.channel_id);

        match experience
            .award(member.guild_id, member.user_id, XpSource::Voice, context)
            .await
        {
            Ok(Some(_)) => awarded += 1,
            Ok(None) => {}
            Err(e) => {
                tracing::error!(
                    "Failed to award voice XP to user {} in guild {}: {}",
                    member.user_id,
                    member.guild_id,
                    e
                );
            }
        }
    }

    awarded
}
