//! Contest configuration model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    constants::{
        MAX_PROBLEM_TITLE_LENGTH, MAX_PROBLEMS, MAX_RUNS, MAX_TEAM_NAME_LENGTH, MAX_TEAMS,
    },
    error::{AppError, AppResult},
    models::run::{Run, ScoringModel},
};

/// A team registered for the contest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
}

/// A problem in the contest, in scoreboard column order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInfo {
    pub id: u32,
    pub title: String,
    pub scoring_model: ScoringModel,
}

/// Full contest configuration as loaded from the feed.
///
/// Teams and problems are fixed for the lifetime of a board; runs reference
/// them by id. `freeze_time` is elapsed contest minutes; runs at or after it
/// are hidden in award mode. `None` disables the freeze entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestConfig {
    pub title: String,
    pub teams: Vec<TeamInfo>,
    pub problems: Vec<ProblemInfo>,
    pub runs: Vec<Run>,
    pub freeze_time: Option<i64>,
}

impl ContestConfig {
    /// Validate referential integrity and size limits of a loaded config.
    ///
    /// Rejects the whole config on the first problem found; nothing is
    /// partially applied.
    pub fn validate(&self) -> AppResult<()> {
        if self.teams.is_empty() {
            return Err(AppError::Validation(
                "Contest must have at least one team".to_string(),
            ));
        }
        if self.problems.is_empty() {
            return Err(AppError::Validation(
                "Contest must have at least one problem".to_string(),
            ));
        }
        if self.teams.len() > MAX_TEAMS {
            return Err(AppError::Validation(format!(
                "Too many teams: {} (max {})",
                self.teams.len(),
                MAX_TEAMS
            )));
        }
        if self.problems.len() > MAX_PROBLEMS {
            return Err(AppError::Validation(format!(
                "Too many problems: {} (max {})",
                self.problems.len(),
                MAX_PROBLEMS
            )));
        }
        if self.runs.len() > MAX_RUNS {
            return Err(AppError::Validation(format!(
                "Too many runs: {} (max {})",
                self.runs.len(),
                MAX_RUNS
            )));
        }

        let mut team_ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            if team.name.is_empty() || team.name.len() > MAX_TEAM_NAME_LENGTH {
                return Err(AppError::Validation(format!(
                    "Invalid name for team {}",
                    team.id
                )));
            }
            if !team_ids.insert(team.id) {
                return Err(AppError::Validation(format!(
                    "Duplicate team id: {}",
                    team.id
                )));
            }
        }

        let mut problem_ids = HashSet::with_capacity(self.problems.len());
        for problem in &self.problems {
            if problem.title.is_empty() || problem.title.len() > MAX_PROBLEM_TITLE_LENGTH {
                return Err(AppError::Validation(format!(
                    "Invalid title for problem {}",
                    problem.id
                )));
            }
            if !problem_ids.insert(problem.id) {
                return Err(AppError::Validation(format!(
                    "Duplicate problem id: {}",
                    problem.id
                )));
            }
        }

        let mut run_ids = HashSet::with_capacity(self.runs.len());
        for run in &self.runs {
            if !run_ids.insert(run.id) {
                return Err(AppError::Validation(format!("Duplicate run id: {}", run.id)));
            }
            if run.time < 0 {
                return Err(AppError::Validation(format!(
                    "Run {} has a negative timestamp",
                    run.id
                )));
            }
            if !team_ids.contains(&run.team_id) {
                return Err(AppError::Validation(format!(
                    "Run {} references unknown team {}",
                    run.id, run.team_id
                )));
            }
            if !problem_ids.contains(&run.problem_id) {
                return Err(AppError::Validation(format!(
                    "Run {} references unknown problem {}",
                    run.id, run.problem_id
                )));
            }
        }

        if let Some(freeze) = self.freeze_time
            && freeze < 0
        {
            return Err(AppError::Validation(
                "Freeze time cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::run::RunResult;

    fn base_config() -> ContestConfig {
        ContestConfig {
            title: "Test Contest".to_string(),
            teams: vec![
                TeamInfo {
                    id: 1,
                    name: "Alpha".to_string(),
                },
                TeamInfo {
                    id: 2,
                    name: "Beta".to_string(),
                },
            ],
            problems: vec![ProblemInfo {
                id: 10,
                title: "A".to_string(),
                scoring_model: ScoringModel::Binary,
            }],
            runs: vec![Run {
                id: 100,
                team_id: 1,
                problem_id: 10,
                time: 30,
                result: RunResult::Accepted,
                score: 0.0,
                scoring_model: ScoringModel::Binary,
            }],
            freeze_time: Some(240),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_duplicate_team_id_rejected() {
        let mut config = base_config();
        config.teams.push(TeamInfo {
            id: 1,
            name: "Alpha again".to_string(),
        });
        assert!(matches!(
            config.validate(),
            Err(AppError::Validation(msg)) if msg.contains("Duplicate team id")
        ));
    }

    #[test]
    fn test_run_referencing_unknown_problem_rejected() {
        let mut config = base_config();
        config.runs[0].problem_id = 999;
        assert!(matches!(
            config.validate(),
            Err(AppError::Validation(msg)) if msg.contains("unknown problem")
        ));
    }

    #[test]
    fn test_empty_teams_rejected() {
        let mut config = base_config();
        config.teams.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_run_time_rejected() {
        let mut config = base_config();
        config.runs[0].time = -5;
        assert!(config.validate().is_err());
    }
}
