use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        experience::{LeaderboardDto, LeaderboardEntryDto, ProgressDto, RankDto},
    },
    server::{
        controller::{self, experience::{get_leaderboard, get_progress, get_rank}},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::experience::get_leaderboard,
        controller::experience::get_rank,
        controller::experience::get_progress,
    ),
    components(schemas(ErrorDto, LeaderboardDto, LeaderboardEntryDto, ProgressDto, RankDto)),
    tags((name = "experience", description = "Leaderboards and member levels"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/guilds/{guild_id}/leaderboard", get(get_leaderboard))
        .route("/api/guilds/{guild_id}/users/{user_id}/rank", get(get_rank))
        .route(
            "/api/guilds/{guild_id}/users/{user_id}/progress",
            get(get_progress),
        )
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
