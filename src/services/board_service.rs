//! Board service
//!
//! Business logic for loading, reading, stepping, and discarding contest
//! boards. All board mutation goes through the state's write lock; reads
//! are pure projections of the engine.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::boards::{
        request::LoadBoardRequest,
        response::{
            AdvanceResponse, BoardResponse, BoardsListResponse, CellResponse, StandingsResponse,
            StandingsRow,
        },
    },
    scoreboard::ContestBoard,
    state::AppState,
    utils::time::format_penalty,
};

/// Board service for business logic
pub struct BoardService;

impl BoardService {
    /// Load a new board from a contest configuration
    pub async fn load_board(
        state: &AppState,
        payload: LoadBoardRequest,
    ) -> AppResult<BoardResponse> {
        let (config, award_mode) = payload.into_parts();
        let rules = state.config().scoring.rules();

        let board = ContestBoard::initialize(config, award_mode, rules)?;

        let mut boards = state.boards().write().await;
        if boards.len() >= state.config().boards.max_boards {
            return Err(AppError::Conflict(format!(
                "Board limit reached ({})",
                state.config().boards.max_boards
            )));
        }

        let id = Uuid::new_v4();
        let response = Self::to_board_response(id, &board);
        boards.insert(id, board);

        tracing::info!(board_id = %id, "board loaded");
        Ok(response)
    }

    /// List all loaded boards
    pub async fn list_boards(state: &AppState) -> AppResult<BoardsListResponse> {
        let boards = state.boards().read().await;

        let mut summaries: Vec<BoardResponse> = boards
            .iter()
            .map(|(id, board)| Self::to_board_response(*id, board))
            .collect();
        summaries.sort_by_key(|summary| summary.loaded_at);

        let total = summaries.len();
        Ok(BoardsListResponse {
            boards: summaries,
            total,
        })
    }

    /// Get one board's summary
    pub async fn get_board(state: &AppState, id: &Uuid) -> AppResult<BoardResponse> {
        let boards = state.boards().read().await;
        let board = boards
            .get(id)
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        Ok(Self::to_board_response(*id, board))
    }

    /// Get the full standings grid
    pub async fn standings(state: &AppState, id: &Uuid) -> AppResult<StandingsResponse> {
        let boards = state.boards().read().await;
        let board = boards
            .get(id)
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        Self::to_standings_response(*id, board)
    }

    /// Get display data for one cell
    pub async fn problem_display(
        state: &AppState,
        id: &Uuid,
        team_id: u32,
        problem_id: u32,
    ) -> AppResult<CellResponse> {
        let boards = state.boards().read().await;
        let board = boards
            .get(id)
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        let display = board.problem_display(team_id, problem_id)?;
        Ok(CellResponse::new(problem_id, display))
    }

    /// Perform one reveal step
    pub async fn advance(state: &AppState, id: &Uuid) -> AppResult<AdvanceResponse> {
        let mut boards = state.boards().write().await;
        let board = boards
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        let step = board.advance()?;

        Ok(AdvanceResponse {
            board_id: *id,
            step,
            hidden_runs: board.hidden_count(),
            finalized_teams: board.finalized_count(),
            focused_team: board.focused_team(),
            reveal_complete: board.reveal_complete(),
        })
    }

    /// Discard a board (the reset path when a contest config changes)
    pub async fn discard(state: &AppState, id: &Uuid) -> AppResult<()> {
        let mut boards = state.boards().write().await;
        boards
            .remove(id)
            .ok_or_else(|| AppError::NotFound("Board not found".to_string()))?;

        tracing::info!(board_id = %id, "board discarded");
        Ok(())
    }

    // Helper functions

    fn to_board_response(id: Uuid, board: &ContestBoard) -> BoardResponse {
        BoardResponse {
            id,
            title: board.title().to_string(),
            team_count: board.teams().len(),
            problem_count: board.problems().len(),
            award_mode: board.award_mode(),
            frozen: board.is_frozen(),
            hidden_runs: board.hidden_count(),
            finalized_teams: board.finalized_count(),
            focused_team: board.focused_team(),
            reveal_complete: board.reveal_complete(),
            loaded_at: board.loaded_at(),
        }
    }

    fn to_standings_response(id: Uuid, board: &ContestBoard) -> AppResult<StandingsResponse> {
        let focused = board.focused_team();

        let rows = board
            .ranked_teams()
            .into_iter()
            .map(|entry| {
                let team_name = board
                    .teams()
                    .iter()
                    .find(|team| team.id == entry.team_id)
                    .map(|team| team.name.clone())
                    .unwrap_or_default();

                let cells = board
                    .problems()
                    .iter()
                    .map(|problem| {
                        board
                            .problem_display(entry.team_id, problem.id)
                            .map(|display| CellResponse::new(problem.id, display))
                    })
                    .collect::<AppResult<Vec<_>>>()?;

                Ok(StandingsRow {
                    rank: entry.rank,
                    team_id: entry.team_id,
                    team_name,
                    total_solved: entry.total_solved,
                    total_penalty: entry.total_penalty,
                    penalty_display: format_penalty(entry.total_penalty),
                    total_score: entry.total_score,
                    finalized: board.team_finalized(entry.team_id),
                    focused: focused == Some(entry.team_id),
                    cells,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(StandingsResponse {
            board_id: id,
            title: board.title().to_string(),
            frozen: board.is_frozen(),
            problems: board.problems().to_vec(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        models::{
            contest::{ProblemInfo, TeamInfo},
            run::{Run, RunResult, ScoringModel},
        },
        scoreboard::RevealStep,
    };

    fn test_state() -> AppState {
        let config = Config {
            server: crate::config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            scoring: crate::config::ScoringConfig {
                penalty_minutes: 20,
                scored_accept_threshold: 0.0,
            },
            boards: crate::config::BoardsConfig { max_boards: 2 },
        };
        AppState::new(config)
    }

    fn load_request(award_mode: bool) -> LoadBoardRequest {
        LoadBoardRequest {
            title: "Regional Finals".to_string(),
            teams: vec![
                TeamInfo {
                    id: 1,
                    name: "X".to_string(),
                },
                TeamInfo {
                    id: 2,
                    name: "Y".to_string(),
                },
            ],
            problems: vec![
                ProblemInfo {
                    id: 10,
                    title: "A".to_string(),
                    scoring_model: ScoringModel::Binary,
                },
                ProblemInfo {
                    id: 20,
                    title: "B".to_string(),
                    scoring_model: ScoringModel::Binary,
                },
            ],
            runs: vec![
                Run {
                    id: 1,
                    team_id: 1,
                    problem_id: 10,
                    time: 50,
                    result: RunResult::Accepted,
                    score: 0.0,
                    scoring_model: ScoringModel::Binary,
                },
                Run {
                    id: 2,
                    team_id: 2,
                    problem_id: 20,
                    time: 90,
                    result: RunResult::Accepted,
                    score: 0.0,
                    scoring_model: ScoringModel::Binary,
                },
                Run {
                    id: 3,
                    team_id: 1,
                    problem_id: 20,
                    time: 120,
                    result: RunResult::Accepted,
                    score: 0.0,
                    scoring_model: ScoringModel::Binary,
                },
            ],
            freeze_time: Some(100),
            award_mode,
        }
    }

    #[tokio::test]
    async fn test_load_and_read_board() {
        let state = test_state();
        let board = BoardService::load_board(&state, load_request(true))
            .await
            .unwrap();

        assert!(board.frozen);
        assert_eq!(board.hidden_runs, 1);

        let standings = BoardService::standings(&state, &board.id).await.unwrap();
        assert_eq!(standings.rows.len(), 2);
        assert!(standings.frozen);

        // the frozen cell renders undetermined
        let x_row = standings.rows.iter().find(|r| r.team_id == 1).unwrap();
        let frozen_cell = x_row.cells.iter().find(|c| c.problem_id == 20).unwrap();
        assert_eq!(frozen_cell.text, "?");

        let cell = BoardService::problem_display(&state, &board.id, 1, 20)
            .await
            .unwrap();
        assert!(cell.pending);
    }

    #[tokio::test]
    async fn test_advance_to_completion() {
        let state = test_state();
        let board = BoardService::load_board(&state, load_request(true))
            .await
            .unwrap();

        let mut steps = 0;
        loop {
            let advanced = BoardService::advance(&state, &board.id).await.unwrap();
            if advanced.step == RevealStep::Complete {
                assert!(advanced.reveal_complete);
                assert_eq!(advanced.hidden_runs, 0);
                break;
            }
            steps += 1;
            assert!(steps < 32, "ceremony did not terminate");
        }

        let standings = BoardService::standings(&state, &board.id).await.unwrap();
        assert!(!standings.frozen);
        assert!(standings.rows.iter().all(|r| r.finalized));
    }

    #[tokio::test]
    async fn test_advance_without_award_mode_conflicts() {
        let state = test_state();
        let board = BoardService::load_board(&state, load_request(false))
            .await
            .unwrap();

        let err = BoardService::advance(&state, &board.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_board_limit_enforced() {
        let state = test_state();
        BoardService::load_board(&state, load_request(false))
            .await
            .unwrap();
        BoardService::load_board(&state, load_request(false))
            .await
            .unwrap();

        let err = BoardService::load_board(&state, load_request(false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_discard_board() {
        let state = test_state();
        let board = BoardService::load_board(&state, load_request(false))
            .await
            .unwrap();

        BoardService::discard(&state, &board.id).await.unwrap();

        let err = BoardService::get_board(&state, &board.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = BoardService::discard(&state, &board.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
