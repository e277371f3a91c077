//! Boundary between the award path and the level-up notifier.
//!
//! The emitter only forwards facts. Sending on an unbounded channel never
//! waits, so announcing a level-up cannot slow down or fail an award.

use dioxus_logger::tracing;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::server::model::experience::LevelUp;

#[derive(Clone, Default)]
pub struct LevelUpEmitter {
    sender: Option<UnboundedSender<LevelUp>>,
}

impl LevelUpEmitter {
    /// Creates an emitter together with the receiver a notifier consumes.
    pub fn channel() -> (Self, UnboundedReceiver<LevelUp>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// Creates an emitter with no notifier; every fact is dropped.
    pub fn disconnected() -> Self {
        Self { sender: None }
    }

    /// Hands a level-up fact to the registered notifier.
    pub fn emit(&self, fact: LevelUp) {
        let Some(sender) = &self.sender else {
            tracing::debug!(
                "No level-up notifier registered, dropping level {} for user {} in guild {}",
                fact.level_after,
                fact.user_id,
                fact.guild_id
            );
            return;
        };

        if let Err(e) = sender.send(fact) {
            tracing::debug!(
                "Level-up notifier stopped, dropping level {} for user {} in guild {}",
                e.0.level_after,
                e.0.user_id,
                e.0.guild_id
            );
        }
    }
}
