use dioxus_logger::tracing;
use serenity::all::{Context, VoiceState};

use crate::server::service::voice::VoicePresence;

/// Handles voice state changes of a member
///
/// Joins, leaves, moves and mute changes all arrive here; the member's
/// presence is recomputed from the new state each time.
pub async fn handle_voice_state_update(
    presence: &VoicePresence,
    _ctx: Context,
    _old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let is_bot = new.member.as_ref().is_some_and(|m| m.user.bot);
    let idle = new.self_mute && new.self_deaf;

    let tracked = presence
        .update(
            guild_id.get(),
            new.user_id.get(),
            new.channel_id.map(|c| c.get()),
            is_bot,
            idle,
        )
        .await;

    tracing::debug!(
        "Voice state of user {} in guild {} updated, earning voice XP: {}",
        new.user_id,
        guild_id,
        tracked
    );
}
