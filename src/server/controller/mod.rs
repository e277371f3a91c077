//! HTTP request handlers.
//!
//! - `experience` - Read-only leaderboard, rank and progress endpoints

pub mod experience;
