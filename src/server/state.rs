//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned into each request
//! handler through Axum's state extraction.

use crate::server::service::experience::ExperienceService;

/// Application state containing shared resources and dependencies.
///
/// `ExperienceService` holds the connection pool and shares its cooldown locks
/// and emitter between clones, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Experience engine answering leaderboard, rank and progress queries.
    pub experience: ExperienceService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `experience` - Experience engine shared with the bot
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(experience: ExperienceService) -> Self {
        Self { experience }
    }
}
