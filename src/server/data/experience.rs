//! Experience record repository.
//!
//! This module provides the `ExperienceRepository` for the one-record-per-member
//! experience table. Awards are applied with SQL increments guarded by the
//! cooldown, so concurrent awards for the same member never overwrite each
//! other or both pass one cooldown window. The repository is generic over
//! the connection so the award path can run it inside a transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use entity::user_experience::Column;

use crate::server::model::experience::{ApplyAwardParam, UserExperience, XpSource};

/// Repository providing database operations for experience records.
pub struct ExperienceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExperienceRepository<'a, C> {
    /// Creates a new ExperienceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the experience record of a member.
    ///
    /// # Returns
    /// - `Ok(Some(UserExperience))` - Record found
    /// - `Ok(None)` - The member never received an award in this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<UserExperience>, DbErr> {
        let entity = entity::prelude::UserExperience::find_by_id((
            guild_id.to_string(),
            user_id.to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(UserExperience::from_entity).transpose()
    }

    /// Applies one award to a member's record, creating the record if absent.
    ///
    /// The first statement is the insert of a zeroed record (ignored when the
    /// record exists), so a transaction running this takes the write lock
    /// before reading anything and never has to upgrade a stale read. The
    /// record is then updated in place, but only while the source cooldown
    /// has elapsed: `total_xp += delta`, the source counter `+= count`, and the
    /// source cooldown timestamp and `updated_at` are set to `param.at`.
    /// Checking the cooldown in the `UPDATE` itself makes check and consume a
    /// single statement. The updated record is read back through the same
    /// connection, so inside a transaction it reflects exactly this award.
    ///
    /// # Arguments
    /// - `param` - Award to apply
    ///
    /// # Returns
    /// - `Ok(Some(UserExperience))` - The record after the award
    /// - `Ok(None)` - The source is on cooldown; the record is unchanged
    /// - `Err(DbErr)` - Database error; inside a transaction nothing is committed
    pub async fn apply_award(
        &self,
        param: ApplyAwardParam,
    ) -> Result<Option<UserExperience>, DbErr> {
        let guild_id = param.guild_id.to_string();
        let user_id = param.user_id.to_string();

        entity::prelude::UserExperience::insert(empty_record(&guild_id, &user_id, param.at))
            .on_conflict(
                OnConflict::columns([Column::GuildId, Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        let (counter, last_award_at) = source_columns(param.source);

        // Eligible when never awarded from this source or the last award is
        // at least `cooldown` old. A cooldown reaching before the earliest
        // representable instant only admits a first award.
        let mut eligible = Condition::any().add(last_award_at.is_null());
        if let Some(cutoff) = param.at.checked_sub_signed(param.cooldown) {
            eligible = eligible.add(last_award_at.lte(cutoff));
        }

        let result = entity::prelude::UserExperience::update_many()
            .col_expr(Column::TotalXp, Expr::col(Column::TotalXp).add(param.delta))
            .col_expr(counter, Expr::col(counter).add(param.count))
            .col_expr(last_award_at, Expr::value(param.at))
            .col_expr(Column::UpdatedAt, Expr::value(param.at))
            .filter(Column::GuildId.eq(guild_id.as_str()))
            .filter(Column::UserId.eq(user_id.as_str()))
            .filter(eligible)
            .exec(self.db)
            .await?;

        match result.rows_affected {
            0 => return Ok(None),
            1 => {}
            _ => return Err(DbErr::RecordNotUpdated),
        }

        self.find(param.guild_id, param.user_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Experience record {}/{} vanished during award",
                    guild_id, user_id
                ))
            })
            .map(Some)
    }

    /// Gets `(user_id, total_xp)` for every record in a guild, unordered.
    ///
    /// # Returns
    /// - `Ok(Vec<(u64, i64)>)` - One pair per member with a record
    /// - `Err(DbErr)` - Database error or unparsable stored user ID
    pub async fn get_totals_by_guild(&self, guild_id: u64) -> Result<Vec<(u64, i64)>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::UserExperience::find()
            .select_only()
            .column(Column::UserId)
            .column(Column::TotalXp)
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .into_tuple()
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(user_id, total_xp)| {
                user_id
                    .parse::<u64>()
                    .map(|user_id| (user_id, total_xp))
                    .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))
            })
            .collect()
    }

    /// Deletes a member's record, resetting them to zero XP.
    ///
    /// # Returns
    /// - `Ok(true)` - A record existed and was deleted
    /// - `Ok(false)` - No record existed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::UserExperience::delete_many()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .filter(Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every record of a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::UserExperience::delete_many()
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Counter column and cooldown timestamp column of a source.
fn source_columns(source: XpSource) -> (Column, Column) {
    match source {
        XpSource::Message => (Column::MessagesSent, Column::LastMessageAt),
        XpSource::Command => (Column::CommandsUsed, Column::LastCommandAt),
        XpSource::Role => (Column::RolesEarned, Column::LastRoleAt),
        XpSource::Voice => (Column::VoiceMinutes, Column::LastVoiceAt),
    }
}

fn empty_record(
    guild_id: &str,
    user_id: &str,
    at: DateTime<Utc>,
) -> entity::user_experience::ActiveModel {
    entity::user_experience::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        total_xp: ActiveValue::Set(0),
        messages_sent: ActiveValue::Set(0),
        commands_used: ActiveValue::Set(0),
        roles_earned: ActiveValue::Set(0),
        voice_minutes: ActiveValue::Set(0),
        last_message_at: ActiveValue::Set(None),
        last_command_at: ActiveValue::Set(None),
        last_role_at: ActiveValue::Set(None),
        last_voice_at: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(at),
    }
}
