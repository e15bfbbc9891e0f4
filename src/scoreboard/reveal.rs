//! Frozen-scoreboard reveal sequencer
//!
//! Implements the award-ceremony protocol: starting from the team currently
//! last in the standings, disclose its hidden results one problem at a time,
//! recompute the ranking after every disclosure, then move to whichever
//! non-finalized team is now last, until every team is finalized.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    error::AppResult,
    models::run::{ProblemId, Run, TeamId},
    scoreboard::standings::StandingsEngine,
};

/// What a single `advance` call did, for the operator UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealStep {
    /// A new team became the reveal cursor
    Focused { team_id: TeamId },
    /// One problem group of hidden runs was applied to the standings
    Disclosed {
        team_id: TeamId,
        problem_id: ProblemId,
        runs_applied: usize,
    },
    /// A fully disclosed team left the ceremony
    Finalized { team_id: TeamId },
    /// Every team is finalized; further calls are no-ops
    Complete,
}

/// Reveal cursor state, threaded through `advance` as a value.
///
/// Each `advance` consumes the state and returns its successor, so the
/// protocol is unit-testable without any rendering harness attached.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    hidden: Vec<Run>,
    finalized: HashSet<TeamId>,
    focused: Option<TeamId>,
}

impl RevealState {
    /// Start a ceremony over the given pool of post-freeze runs.
    pub fn new(hidden: Vec<Run>) -> Self {
        Self {
            hidden,
            finalized: HashSet::new(),
            focused: None,
        }
    }

    /// Runs still hidden from the standings
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// Teams already finalized
    pub fn finalized_count(&self) -> usize {
        self.finalized.len()
    }

    /// Current reveal cursor, if a team is being walked
    pub fn focused(&self) -> Option<TeamId> {
        self.focused
    }

    /// Whether the given team has been finalized
    pub fn is_finalized(&self, team_id: TeamId) -> bool {
        self.finalized.contains(&team_id)
    }

    /// Whether the ceremony has finished for the given team count
    pub fn is_complete(&self, team_count: usize) -> bool {
        self.hidden.is_empty() && self.finalized.len() == team_count
    }

    /// Perform one ceremony step against the standings engine.
    ///
    /// The next focus team is always chosen from the live, recomputed
    /// ranking, so a team climbing during its own reveal changes who is
    /// "worst remaining" on the following call.
    pub fn advance(mut self, engine: &mut StandingsEngine) -> AppResult<(RevealState, RevealStep)> {
        if let Some(team_id) = self.focused {
            return self.step_focused(team_id, engine);
        }

        // No cursor: scan the current standings bottom-up for the worst
        // team not yet finalized.
        let standings = engine.ranked_teams();
        let target = standings
            .iter()
            .rev()
            .find(|entry| !self.finalized.contains(&entry.team_id))
            .map(|entry| entry.team_id);

        match target {
            Some(team_id) => {
                // A team with nothing hidden finalizes in the same step.
                if !self.has_hidden_for(team_id) {
                    self.finalized.insert(team_id);
                    tracing::info!(team_id, "team finalized with no hidden runs");
                    return Ok((self, RevealStep::Finalized { team_id }));
                }
                self.focused = Some(team_id);
                tracing::info!(team_id, "reveal cursor moved");
                Ok((self, RevealStep::Focused { team_id }))
            }
            None => Ok((self, RevealStep::Complete)),
        }
    }

    fn step_focused(
        mut self,
        team_id: TeamId,
        engine: &mut StandingsEngine,
    ) -> AppResult<(RevealState, RevealStep)> {
        // First problem, in contest-wide registration order, that still has
        // hidden runs for the focused team.
        let next_problem = engine
            .problems()
            .iter()
            .map(|problem| problem.id)
            .find(|&problem_id| {
                self.hidden
                    .iter()
                    .any(|run| run.team_id == team_id && run.problem_id == problem_id)
            });

        let Some(problem_id) = next_problem else {
            self.finalized.insert(team_id);
            self.focused = None;
            tracing::info!(team_id, "team fully disclosed and finalized");
            return Ok((self, RevealStep::Finalized { team_id }));
        };

        let mut batch: Vec<Run> = Vec::new();
        self.hidden.retain(|run| {
            if run.team_id == team_id && run.problem_id == problem_id {
                batch.push(*run);
                false
            } else {
                true
            }
        });
        batch.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.id.cmp(&b.id)));

        for run in &batch {
            engine.ingest(run)?;
        }

        tracing::info!(
            team_id,
            problem_id,
            runs = batch.len(),
            "problem group disclosed"
        );
        Ok((
            self,
            RevealStep::Disclosed {
                team_id,
                problem_id,
                runs_applied: batch.len(),
            },
        ))
    }

    fn has_hidden_for(&self, team_id: TeamId) -> bool {
        self.hidden.iter().any(|run| run.team_id == team_id)
    }
}
