//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let record = factory::user_experience::UserExperienceFactory::new(&db)
//!     .guild_id("100")
//!     .total_xp(1500)
//!     .build()
//!     .await?;
//!
//! let config = factory::create_guild_config(&db, "100").await?;
//! ```
//!
//! # Available Factories
//!
//! - `user_experience` - Create experience records
//! - `guild_experience_config` - Create guild experience configs
//! - `helpers` - Shared id generation

pub mod guild_experience_config;
pub mod helpers;
pub mod user_experience;

pub use guild_experience_config::create_guild_config;
pub use user_experience::create_user_experience;
