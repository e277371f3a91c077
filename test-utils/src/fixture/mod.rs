//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the
//! default values for factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let config = fixture::guild_experience_config::entity_builder()
//!     .message_cooldown(0)
//!     .build();
//! ```

pub mod guild_experience_config;

pub use guild_experience_config::{
    entity as guild_experience_config_entity,
    entity_builder as guild_experience_config_entity_builder,
};
