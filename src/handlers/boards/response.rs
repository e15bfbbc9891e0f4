//! Board response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::{
        contest::ProblemInfo,
        run::{ProblemId, TeamId},
    },
    scoreboard::{CellDisplay, RevealStep},
};

/// Board summary
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub id: Uuid,
    pub title: String,
    pub team_count: usize,
    pub problem_count: usize,
    pub award_mode: bool,
    pub frozen: bool,
    pub hidden_runs: usize,
    pub finalized_teams: usize,
    pub focused_team: Option<TeamId>,
    pub reveal_complete: bool,
    pub loaded_at: DateTime<Utc>,
}

/// List of loaded boards
#[derive(Debug, Serialize)]
pub struct BoardsListResponse {
    pub boards: Vec<BoardResponse>,
    pub total: usize,
}

/// One scoreboard cell
#[derive(Debug, Serialize)]
pub struct CellResponse {
    pub problem_id: ProblemId,
    pub accepted: bool,
    pub pending: bool,
    pub failed_attempts: u32,
    pub best_score: f64,
    /// Cell text as the renderer paints it: "+", "+2", "-1", "?", "+37.5"
    pub text: String,
}

impl CellResponse {
    pub fn new(problem_id: ProblemId, display: CellDisplay) -> Self {
        Self {
            problem_id,
            accepted: display.accepted,
            pending: display.pending,
            failed_attempts: display.failed_attempts,
            best_score: display.best_score,
            text: display.text,
        }
    }
}

/// One row of the published standings
#[derive(Debug, Serialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub total_solved: u32,
    pub total_penalty: i64,
    pub penalty_display: String,
    pub total_score: f64,
    /// Team already finalized by the ceremony
    pub finalized: bool,
    /// Team currently holding the reveal cursor
    pub focused: bool,
    pub cells: Vec<CellResponse>,
}

/// Full standings grid for the renderer
#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub board_id: Uuid,
    pub title: String,
    pub frozen: bool,
    pub problems: Vec<ProblemInfo>,
    pub rows: Vec<StandingsRow>,
}

/// Result of one reveal step
#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub board_id: Uuid,
    pub step: RevealStep,
    pub hidden_runs: usize,
    pub finalized_teams: usize,
    pub focused_team: Option<TeamId>,
    pub reveal_complete: bool,
}
