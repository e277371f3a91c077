//! Guild ranking.
//!
//! One deterministic ordering backs both the leaderboard and rank lookups:
//! total XP descending, ties broken by ascending user ID. Ranks are computed
//! over every record of the guild, never over a page.

use crate::server::model::experience::{LeaderboardEntry, Rank};

/// Sorts `(user_id, total_xp)` pairs into leaderboard order.
pub fn rank_standings(mut standings: Vec<(u64, i64)>) -> Vec<(u64, i64)> {
    standings.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    standings
}

/// First `limit` rows of already ordered standings.
pub fn top_entries(standings: &[(u64, i64)], limit: usize) -> Vec<LeaderboardEntry> {
    standings
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, (user_id, total_xp))| LeaderboardEntry {
            position: index as u64 + 1,
            user_id: *user_id,
            total_xp: *total_xp,
        })
        .collect()
}

/// Rank of `user_id` within already ordered standings.
pub fn rank_of(standings: &[(u64, i64)], user_id: u64) -> Rank {
    match standings.iter().position(|(id, _)| *id == user_id) {
        Some(index) => Rank::Ranked {
            position: index as u64 + 1,
            total_users: standings.len() as u64,
        },
        None => Rank::Unranked,
    }
}
