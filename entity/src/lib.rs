//! SeaORM entities for the levelboard schema.

pub mod prelude;

pub mod guild_experience_config;
pub mod user_experience;
