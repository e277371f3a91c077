use crate::server::{
    data::guild_config::GuildExperienceConfigRepository, error::AppError,
    model::guild_config::GuildExperienceConfig,
};
use chrono::TimeDelta;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::guild_experience_config::GuildExperienceConfigFactory};

mod get;
mod upsert;
