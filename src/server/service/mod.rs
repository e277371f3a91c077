//! Service layer for business logic and orchestration.
//!
//! This module sits between the callers (bot handlers, scheduled jobs, HTTP
//! controllers) and the data (repository) layer.
//!
//! - `experience` - XP awards, cooldowns, levels and leaderboards
//! - `level_up` - Discord announcements of level-ups
//! - `voice` - Members currently earning voice XP

pub mod experience;
pub mod level_up;
pub mod voice;
