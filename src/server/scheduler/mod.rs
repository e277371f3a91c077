//! Cron jobs.
//!
//! - `voice_ticks` - Awards voice XP to members in voice channels every minute

pub mod voice_ticks;
