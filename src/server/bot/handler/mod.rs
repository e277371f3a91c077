use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildMemberUpdateEvent, Interaction, Member, Message, Ready,
    UnavailableGuild, VoiceState,
};
use serenity::async_trait;

use crate::server::service::{experience::ExperienceService, voice::VoicePresence};

pub mod guild;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub experience: ExperienceService,
    pub presence: VoicePresence,
}

impl Handler {
    pub fn new(db: DatabaseConnection, experience: ExperienceService, presence: VoicePresence) -> Self {
        Self {
            db,
            experience,
            presence,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.experience, ctx, message).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.experience, ctx, interaction).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.experience, ctx, old, new, event).await;
    }

    /// Called when a member joins, leaves, moves or mutes in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.presence, ctx, old, new).await;
    }

    /// Called when the bot leaves a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(
            &self.db,
            &self.experience,
            &self.presence,
            ctx,
            incomplete,
            full,
        )
        .await;
    }
}
