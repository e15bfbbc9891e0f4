//! Standings engine
//!
//! Owns the per-team-per-problem cell arena and produces the ranking on
//! demand. Teams and problems are fixed at construction; the only mutation
//! path is [`StandingsEngine::ingest`], and every read is a pure projection
//! of the cells folded so far.

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        contest::{ProblemInfo, TeamInfo},
        run::{ProblemId, Run, ScoringModel, TeamId},
    },
    scoreboard::{
        ScoringRules,
        cell::{CellDisplay, ProblemCell},
        rank::{RankEntry, TeamTotals, rank_teams},
    },
};

/// Live standings for one contest.
///
/// Layout is a flat row-major arena: `cells[team_index * problems + problem_index]`.
/// The problem table keeps config order, which is the contest-wide problem
/// order the reveal sequencer discloses in.
pub struct StandingsEngine {
    rules: ScoringRules,
    teams: Vec<TeamInfo>,
    problems: Vec<ProblemInfo>,
    team_index: HashMap<TeamId, usize>,
    problem_index: HashMap<ProblemId, usize>,
    cells: Vec<ProblemCell>,
}

impl StandingsEngine {
    /// Build an engine over a fixed set of teams and problems.
    pub fn new(
        teams: Vec<TeamInfo>,
        problems: Vec<ProblemInfo>,
        rules: ScoringRules,
    ) -> AppResult<Self> {
        let mut team_index = HashMap::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            if team_index.insert(team.id, idx).is_some() {
                return Err(AppError::Validation(format!(
                    "Duplicate team id: {}",
                    team.id
                )));
            }
        }

        let mut problem_index = HashMap::with_capacity(problems.len());
        for (idx, problem) in problems.iter().enumerate() {
            if problem_index.insert(problem.id, idx).is_some() {
                return Err(AppError::Validation(format!(
                    "Duplicate problem id: {}",
                    problem.id
                )));
            }
        }

        let cells = vec![ProblemCell::default(); teams.len() * problems.len()];

        Ok(Self {
            rules,
            teams,
            problems,
            team_index,
            problem_index,
            cells,
        })
    }

    /// Fold one run into its cell.
    ///
    /// Fails with [`AppError::UnknownEntity`] when the run references an
    /// unregistered team or problem, and with [`AppError::OutOfOrderRun`]
    /// when the run's time precedes the cell's last folded time. A failed
    /// call leaves the engine untouched.
    pub fn ingest(&mut self, run: &Run) -> AppResult<()> {
        let team_idx = self.team_idx(run.team_id).ok_or_else(|| {
            AppError::UnknownEntity(format!(
                "Run {} references unregistered team {}",
                run.id, run.team_id
            ))
        })?;
        let problem_idx = self.problem_idx(run.problem_id).ok_or_else(|| {
            AppError::UnknownEntity(format!(
                "Run {} references unregistered problem {}",
                run.id, run.problem_id
            ))
        })?;

        let slot = self.cell_slot(team_idx, problem_idx);
        if let Some(last_seen) = self.cells[slot].last_seen()
            && run.time < last_seen
        {
            return Err(AppError::OutOfOrderRun(format!(
                "Run {} at minute {} precedes minute {} already folded for team {} problem {}",
                run.id, run.time, last_seen, run.team_id, run.problem_id
            )));
        }

        self.cells[slot].fold(run, &self.rules);
        tracing::debug!(
            run_id = run.id,
            team_id = run.team_id,
            problem_id = run.problem_id,
            result = %run.result,
            "run folded into standings"
        );
        Ok(())
    }

    /// All teams ordered and annotated with their competition rank.
    ///
    /// Recomputed from the cell arena on every call; calling it twice
    /// without an intervening `ingest` yields identical output.
    pub fn ranked_teams(&self) -> Vec<RankEntry> {
        let totals = self
            .teams
            .iter()
            .enumerate()
            .map(|(team_idx, team)| self.totals_for(team_idx, team.id))
            .collect();
        rank_teams(totals)
    }

    /// Display data for one scoreboard cell.
    pub fn cell_display(&self, team_id: TeamId, problem_id: ProblemId) -> AppResult<CellDisplay> {
        let team_idx = self
            .team_idx(team_id)
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;
        let problem_idx = self
            .problem_idx(problem_id)
            .ok_or_else(|| AppError::NotFound(format!("Problem {} not found", problem_id)))?;

        let cell = &self.cells[self.cell_slot(team_idx, problem_idx)];
        Ok(cell.display(self.problems[problem_idx].scoring_model, &self.rules))
    }

    /// Problems in contest-wide registration order
    pub fn problems(&self) -> &[ProblemInfo] {
        &self.problems
    }

    /// Registered teams in config order
    pub fn teams(&self) -> &[TeamInfo] {
        &self.teams
    }

    /// Number of registered teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    fn totals_for(&self, team_idx: usize, team_id: TeamId) -> TeamTotals {
        let mut solved = 0u32;
        let mut penalty = 0i64;
        let mut score = 0.0f64;

        for (problem_idx, problem) in self.problems.iter().enumerate() {
            let cell = &self.cells[self.cell_slot(team_idx, problem_idx)];
            match problem.scoring_model {
                ScoringModel::Binary => {
                    if cell.accepted() {
                        solved += 1;
                        penalty += cell.penalty();
                    }
                }
                ScoringModel::Scored => {
                    score += cell.best_score();
                }
            }
        }

        TeamTotals {
            team_id,
            solved,
            penalty,
            score,
        }
    }

    fn team_idx(&self, team_id: TeamId) -> Option<usize> {
        self.team_index.get(&team_id).copied()
    }

    fn problem_idx(&self, problem_id: ProblemId) -> Option<usize> {
        self.problem_index.get(&problem_id).copied()
    }

    fn cell_slot(&self, team_idx: usize, problem_idx: usize) -> usize {
        team_idx * self.problems.len() + problem_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::run::{RunResult, ScoringModel};

    fn engine() -> StandingsEngine {
        let teams = vec![
            TeamInfo {
                id: 1,
                name: "Alpha".to_string(),
            },
            TeamInfo {
                id: 2,
                name: "Beta".to_string(),
            },
        ];
        let problems = vec![
            ProblemInfo {
                id: 10,
                title: "A".to_string(),
                scoring_model: ScoringModel::Binary,
            },
            ProblemInfo {
                id: 20,
                title: "B".to_string(),
                scoring_model: ScoringModel::Scored,
            },
        ];
        StandingsEngine::new(teams, problems, ScoringRules::default()).unwrap()
    }

    fn run(id: u32, team_id: u32, problem_id: u32, time: i64, result: RunResult) -> Run {
        Run {
            id,
            team_id,
            problem_id,
            time,
            result,
            score: 0.0,
            scoring_model: if problem_id == 20 {
                ScoringModel::Scored
            } else {
                ScoringModel::Binary
            },
        }
    }

    #[test]
    fn test_unknown_team_rejected() {
        let mut engine = engine();
        let err = engine
            .ingest(&run(1, 99, 10, 5, RunResult::Accepted))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownEntity(_)));
    }

    #[test]
    fn test_unknown_problem_rejected() {
        let mut engine = engine();
        let err = engine
            .ingest(&run(1, 1, 99, 5, RunResult::Accepted))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownEntity(_)));
    }

    #[test]
    fn test_out_of_order_run_rejected() {
        let mut engine = engine();
        engine.ingest(&run(1, 1, 10, 60, RunResult::Rejected)).unwrap();

        let err = engine
            .ingest(&run(2, 1, 10, 30, RunResult::Accepted))
            .unwrap_err();
        assert!(matches!(err, AppError::OutOfOrderRun(_)));

        // equal timestamps are fine, and other cells are unaffected
        engine.ingest(&run(3, 1, 10, 60, RunResult::Accepted)).unwrap();
        engine.ingest(&run(4, 2, 10, 10, RunResult::Accepted)).unwrap();
    }

    #[test]
    fn test_totals_split_by_scoring_model() {
        let mut engine = engine();
        engine.ingest(&run(1, 1, 10, 30, RunResult::Rejected)).unwrap();
        engine.ingest(&run(2, 1, 10, 70, RunResult::Accepted)).unwrap();
        let mut scored = run(3, 1, 20, 80, RunResult::Accepted);
        scored.score = 42.5;
        engine.ingest(&scored).unwrap();

        let ranked = engine.ranked_teams();
        let alpha = ranked.iter().find(|e| e.team_id == 1).unwrap();
        assert_eq!(alpha.total_solved, 1);
        assert_eq!(alpha.total_penalty, 90);
        assert_eq!(alpha.total_score, 42.5);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut engine = engine();
        engine.ingest(&run(1, 1, 10, 30, RunResult::Accepted)).unwrap();
        engine.ingest(&run(2, 2, 10, 40, RunResult::Accepted)).unwrap();

        let first = engine.ranked_teams();
        let second = engine.ranked_teams();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_ingest_leaves_engine_untouched() {
        let mut engine = engine();
        engine.ingest(&run(1, 1, 10, 50, RunResult::Rejected)).unwrap();
        let before = engine.ranked_teams();

        let _ = engine.ingest(&run(2, 1, 10, 20, RunResult::Accepted));
        assert_eq!(engine.ranked_teams(), before);

        let display = engine.cell_display(1, 10).unwrap();
        assert_eq!(display.failed_attempts, 1);
        assert!(!display.accepted);
    }
}
