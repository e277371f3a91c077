use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        experience::{LeaderboardDto, ProgressDto, RankDto},
    },
    server::{
        error::AppError, service::experience::MAX_LEADERBOARD_LIMIT, state::AppState,
    },
};

/// Tag for grouping experience endpoints in OpenAPI documentation
pub static EXPERIENCE_TAG: &str = "experience";

#[derive(Deserialize, IntoParams)]
pub struct LeaderboardParams {
    /// Number of rows, 1 to 100
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Get the leaderboard of a guild.
///
/// Rows are ordered by total XP descending, ties broken by ascending user ID.
///
/// # Arguments
/// - `state` - Application state containing the experience engine
/// - `guild_id` - Discord guild ID
/// - `params` - Number of rows to return
///
/// # Returns
/// - `200 OK` - Leaderboard rows
/// - `400 Bad Request` - Limit outside 1 to 100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/leaderboard",
    tag = EXPERIENCE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        LeaderboardParams
    ),
    responses(
        (status = 200, description = "Leaderboard of the guild", body = LeaderboardDto),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    if params.limit == 0 || params.limit > MAX_LEADERBOARD_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_LEADERBOARD_LIMIT
        )));
    }

    let entries = state
        .experience
        .get_leaderboard(guild_id, params.limit)
        .await?;

    Ok(Json(LeaderboardDto {
        guild_id,
        entries: entries.into_iter().map(|e| e.into_dto()).collect(),
    }))
}

/// Get the rank of a member.
///
/// Members without any XP in the guild are reported as unranked.
///
/// # Returns
/// - `200 OK` - Rank of the member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/users/{user_id}/rank",
    tag = EXPERIENCE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Rank of the member", body = RankDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rank(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let rank = state.experience.get_rank(guild_id, user_id).await?;

    Ok(Json(rank.into_dto(guild_id, user_id)))
}

/// Get the level progress of a member.
///
/// # Returns
/// - `200 OK` - Level, progress towards the next level, rank and activity counters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/users/{user_id}/progress",
    tag = EXPERIENCE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Progress of the member", body = ProgressDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_progress(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let standing = state.experience.get_standing(guild_id, user_id).await?;

    Ok(Json(standing.into_dto(guild_id, user_id)))
}
