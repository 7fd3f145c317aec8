//! Game collection API handlers.
//!
//! ```text
//! GET    /api/games?genre=&platform=   list, optionally filtered
//! GET    /api/games/export             download the collection as JSON
//! GET    /api/games/{id}               fetch one
//! POST   /api/games                    create (validated)
//! PUT    /api/games/{id}               update (validated partial replace)
//! DELETE /api/games/{id}               delete
//! POST   /api/games/{id}/favorite      toggle the favourite flag
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use serde_json::json;

use crate::domain::{DomainError, Game, GameFilter, GameId, GameSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

const EXPORT_DISPOSITION: &str = "attachment; filename=games_collection.json";

/// List the collection, optionally narrowed by genre and platform membership.
#[utoipa::path(
    get,
    path = "/api/games",
    params(GameFilter),
    responses(
        (status = 200, description = "Matching games", body = [Game]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "listGames"
)]
#[get("/games")]
pub async fn list_games(
    state: web::Data<HttpState>,
    filter: web::Query<GameFilter>,
) -> ApiResult<web::Json<Vec<Game>>> {
    Ok(web::Json(state.games.list(filter.into_inner()).await?))
}

/// Download the full collection as an attached, pretty-printed JSON file.
#[utoipa::path(
    get,
    path = "/api/games/export",
    responses(
        (status = 200, description = "Collection dump", body = [Game]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "exportGames"
)]
#[get("/games/export")]
pub async fn export_games(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let games = state.games.export().await?;
    let payload = serde_json::to_string_pretty(&games)
        .map_err(|err| DomainError::internal(format!("failed to encode export payload: {err}")))?;
    Ok(HttpResponse::Ok()
        .insert_header(header::ContentType::json())
        .insert_header((header::CONTENT_DISPOSITION, EXPORT_DISPOSITION))
        .body(payload))
}

/// Fetch a single game by identifier.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    params(("id" = uuid::Uuid, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No such game"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "getGame"
)]
#[get("/games/{id}")]
pub async fn get_game(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Game>> {
    let id = GameId::parse(&path.into_inner())?;
    Ok(web::Json(state.games.fetch(&id).await?))
}

/// Create a game from a validated submission.
#[utoipa::path(
    post,
    path = "/api/games",
    request_body = GameSubmission,
    responses(
        (status = 201, description = "Created game including its assigned id", body = Game),
        (status = 400, description = "Validation failure carrying every violation"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "createGame"
)]
#[post("/games")]
pub async fn create_game(
    state: web::Data<HttpState>,
    payload: web::Json<GameSubmission>,
) -> ApiResult<HttpResponse> {
    let game = state.games.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(game))
}

/// Update a game via validated partial replace.
///
/// `id` and `createdAt` in the payload are ignored; the stored values win.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    params(("id" = uuid::Uuid, Path, description = "Game identifier")),
    request_body = GameSubmission,
    responses(
        (status = 200, description = "Updated game", body = Game),
        (status = 400, description = "Malformed identifier or validation failure"),
        (status = 404, description = "No such game"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "updateGame"
)]
#[put("/games/{id}")]
pub async fn update_game(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<GameSubmission>,
) -> ApiResult<web::Json<Game>> {
    let id = GameId::parse(&path.into_inner())?;
    Ok(web::Json(
        state.games.update(&id, payload.into_inner()).await?,
    ))
}

/// Delete a game permanently.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    params(("id" = uuid::Uuid, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No such game"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "deleteGame"
)]
#[delete("/games/{id}")]
pub async fn delete_game(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = GameId::parse(&path.into_inner())?;
    state.games.remove(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Game deleted successfully." })))
}

/// Toggle the favourite flag, independent of the general update path.
#[utoipa::path(
    post,
    path = "/api/games/{id}/favorite",
    params(("id" = uuid::Uuid, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "New favourite state"),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No such game"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["games"],
    operation_id = "toggleFavorite"
)]
#[post("/games/{id}/favorite")]
pub async fn toggle_favorite(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = GameId::parse(&path.into_inner())?;
    let is_favorite = state.games.toggle_favorite(&id).await?;
    Ok(HttpResponse::Ok().json(json!({ "isFavorite": is_favorite })))
}
