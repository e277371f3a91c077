use dioxus_logger::tracing;
use serenity::all::{Context, GuildMemberUpdateEvent, Member, RoleId};

use crate::server::{
    model::experience::{AwardContext, XpSource},
    service::experience::ExperienceService,
};

/// Handles the guild_member_update event
///
/// Every role the member gained since the cached state earns role XP. Without
/// a cached previous state the added roles are unknown and nothing is awarded.
pub async fn handle_guild_member_update(
    experience: &ExperienceService,
    _ctx: Context,
    old: Option<Member>,
    new: Option<Member>,
    _event: GuildMemberUpdateEvent,
) {
    let Some(member) = new else {
        return;
    };

    if member.user.bot {
        return;
    }

    let Some(old) = old else {
        tracing::debug!(
            "No cached state for user {} in guild {}, skipping role XP",
            member.user.id,
            member.guild_id
        );
        return;
    };

    let guild_id = member.guild_id.get();
    let user_id = member.user.id.get();

    for role_id in added_roles(&old.roles, &member.roles) {
        match experience
            .award(guild_id, user_id, XpSource::Role, AwardContext::now())
            .await
        {
            Ok(Some(_)) => {
                tracing::debug!(
                    "Awarded role XP to user {} for role {} in guild {}",
                    user_id,
                    role_id,
                    guild_id
                );
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(
                    "Failed to award role XP to user {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
            }
        }
    }
}

/// Roles present in `new` but not in `old`.
pub fn added_roles(old: &[RoleId], new: &[RoleId]) -> Vec<RoleId> {
    new.iter()
        .filter(|role| !old.contains(role))
        .copied()
        .collect()
}
