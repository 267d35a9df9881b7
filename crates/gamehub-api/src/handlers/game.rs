//! Game catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use gamehub_core::error::AppError;
use gamehub_entity::game::Game;

use crate::dto::request::{CreateGameRequest, UpdateGameRequest};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/games
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let page = params.into_page_request();
    let games = state.game_service.list_games(&page).await?;
    Ok(Json(games))
}

/// GET /api/games/game/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Game>, ApiError> {
    let game = state
        .game_service
        .get_game(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Game {id} not found")))?;
    Ok(Json(game))
}

/// GET /api/games/genre/{genre}
pub async fn list_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state.game_service.list_by_genre(&genre).await?;
    Ok(Json(games))
}

/// POST /api/games
pub async fn create_game(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateGameRequest>, ApiError>,
) -> Result<Response, ApiError> {
    let game = state.game_service.create_game(req.into_draft()).await?;
    let location = format!("/api/games/game/{}", game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(game),
    )
        .into_response())
}

/// PUT /api/games/{id}
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateGameRequest>, ApiError>,
) -> Result<StatusCode, ApiError> {
    if req.id != id {
        return Err(AppError::validation("Body id does not match the path id").into());
    }

    let updated = state.game_service.update_game(id, req.into_draft()).await?;
    if !updated {
        return Err(AppError::not_found(format!("Game {id} not found")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.game_service.delete_game(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Game {id} not found")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
