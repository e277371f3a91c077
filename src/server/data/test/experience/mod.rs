use crate::server::{
    data::experience::ExperienceRepository,
    error::AppError,
    model::experience::{ApplyAwardParam, XpSource},
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply_award;
mod delete;
mod get_totals_by_guild;

fn at_second(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, second).unwrap()
}

fn award(guild_id: u64, user_id: u64, source: XpSource, delta: i64) -> ApplyAwardParam {
    ApplyAwardParam {
        guild_id,
        user_id,
        source,
        delta,
        count: 1,
        at: at_second(0),
        cooldown: TimeDelta::zero(),
    }
}
