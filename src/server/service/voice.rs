//! Tracking of members currently earning voice XP.
//!
//! The bot updates `VoicePresence` from voice state events; the voice tick job
//! reads a snapshot once per interval and awards every tracked member.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

/// Voice channel membership relevant to experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceMember {
    pub guild_id: u64,
    pub user_id: u64,
    pub channel_id: u64,
}

/// Members in a voice channel who are eligible for voice XP.
///
/// Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct VoicePresence {
    members: Arc<RwLock<HashMap<(u64, u64), u64>>>,
}

impl VoicePresence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a voice state change of one member.
    ///
    /// The member is tracked while connected to a channel, not a bot and not
    /// both self-muted and self-deafened; otherwise they are dropped.
    ///
    /// # Returns
    /// - `true` - The member is tracked after the update
    /// - `false` - The member is not tracked
    pub async fn update(
        &self,
        guild_id: u64,
        user_id: u64,
        channel_id: Option<u64>,
        is_bot: bool,
        idle: bool,
    ) -> bool {
        let mut members = self.members.write().await;

        match channel_id {
            Some(channel_id) if !is_bot && !idle => {
                members.insert((guild_id, user_id), channel_id);
                true
            }
            _ => {
                members.remove(&(guild_id, user_id));
                false
            }
        }
    }

    /// Stops tracking every member of a guild.
    pub async fn clear_guild(&self, guild_id: u64) {
        self.members
            .write()
            .await
            .retain(|(guild, _), _| *guild != guild_id);
    }

    /// Members tracked right now.
    pub async fn snapshot(&self) -> Vec<VoiceMember> {
        self.members
            .read()
            .await
            .iter()
            .map(|(&(guild_id, user_id), &channel_id)| VoiceMember {
                guild_id,
                user_id,
                channel_id,
            })
            .collect()
    }
}
