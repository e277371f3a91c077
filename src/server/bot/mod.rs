//! Discord bot integration for activity tracking and experience commands.
//!
//! The bot turns gateway events into experience awards and answers the
//! `/level`, `/leaderboard` and `/xp-reset` slash commands. It is initialized
//! during startup and runs in a separate tokio task. Its HTTP client is shared
//! with the level-up notifier so announcements use the same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and removal, slash command interactions
//! - `GUILD_MESSAGES` - Messages in guild channels for message XP
//! - `GUILD_MEMBERS` - Member role changes for role XP (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins and leaves for voice XP
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
