//! Board request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_CONTEST_TITLE_LENGTH,
    models::{
        contest::{ContestConfig, ProblemInfo, TeamInfo},
        run::Run,
    },
};

/// Load board request: the full contest configuration plus the view mode
#[derive(Debug, Deserialize, Validate)]
pub struct LoadBoardRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_TITLE_LENGTH))]
    pub title: String,

    pub teams: Vec<TeamInfo>,

    /// Problems in scoreboard column order (also the reveal order)
    pub problems: Vec<ProblemInfo>,

    #[serde(default)]
    pub runs: Vec<Run>,

    /// Elapsed contest minute after which runs are hidden (optional)
    pub freeze_time: Option<i64>,

    /// Load for the award ceremony (enables the reveal when frozen)
    #[serde(default)]
    pub award_mode: bool,
}

impl LoadBoardRequest {
    /// Split into the engine-facing config and the view mode flag
    pub fn into_parts(self) -> (ContestConfig, bool) {
        let config = ContestConfig {
            title: self.title,
            teams: self.teams,
            problems: self.problems,
            runs: self.runs,
            freeze_time: self.freeze_time,
        };
        (config, self.award_mode)
    }
}
