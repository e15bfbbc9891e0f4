//! Board handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::BoardService, state::AppState};

use super::{
    request::LoadBoardRequest,
    response::{
        AdvanceResponse, BoardResponse, BoardsListResponse, CellResponse, StandingsResponse,
    },
};

/// Load a contest board from a configuration payload
pub async fn load_board(
    State(state): State<AppState>,
    Json(payload): Json<LoadBoardRequest>,
) -> AppResult<(StatusCode, Json<BoardResponse>)> {
    // Validate request
    payload.validate()?;

    let board = BoardService::load_board(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(board)))
}

/// List all loaded boards
pub async fn list_boards(State(state): State<AppState>) -> AppResult<Json<BoardsListResponse>> {
    let boards = BoardService::list_boards(&state).await?;
    Ok(Json(boards))
}

/// Get a specific board's summary
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BoardResponse>> {
    let board = BoardService::get_board(&state, &id).await?;
    Ok(Json(board))
}

/// Get the current standings grid
pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StandingsResponse>> {
    let standings = BoardService::standings(&state, &id).await?;
    Ok(Json(standings))
}

/// Get display data for one scoreboard cell
pub async fn get_problem_display(
    State(state): State<AppState>,
    Path((id, team_id, problem_id)): Path<(Uuid, u32, u32)>,
) -> AppResult<Json<CellResponse>> {
    let cell = BoardService::problem_display(&state, &id, team_id, problem_id).await?;
    Ok(Json(cell))
}

/// Perform one reveal step (the "step forward" gesture)
pub async fn advance_reveal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AdvanceResponse>> {
    let advanced = BoardService::advance(&state, &id).await?;
    Ok(Json(advanced))
}

/// Discard a board
pub async fn discard_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    BoardService::discard(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
