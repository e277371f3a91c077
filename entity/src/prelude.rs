pub use super::guild_experience_config::Entity as GuildExperienceConfig;
pub use super::user_experience::Entity as UserExperience;
