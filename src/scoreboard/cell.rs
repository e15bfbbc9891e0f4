//! Per-team-per-problem aggregate state
//!
//! A [`ProblemCell`] folds every run one team made on one problem, in time
//! order, into the small amount of state the scoreboard needs: attempt
//! count, acceptance, frozen penalty, best partial score, and whether an
//! undisclosed run is outstanding.

use serde::Serialize;

use crate::{
    constants::CELL_TEXT_PENDING,
    models::run::{Run, RunResult, ScoringModel},
    scoreboard::ScoringRules,
};

/// Aggregate state for one (team, problem) pair.
///
/// Binary problems move `Untouched -> Pending -> {Accepted | Rejected-retry}`;
/// acceptance is terminal and freezes `attempts` and `penalty`. Scored
/// problems have no terminal state: every disclosed run raises `best_score`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemCell {
    attempts: u32,
    accepted: bool,
    pending: bool,
    best_score: f64,
    penalty: i64,
    accepted_at: Option<i64>,
    last_seen: Option<i64>,
}

impl ProblemCell {
    /// Fold one run into this cell.
    ///
    /// The caller (the standings engine) has already verified time order;
    /// this method never fails.
    pub fn fold(&mut self, run: &Run, rules: &ScoringRules) {
        self.last_seen = Some(run.time);

        match run.scoring_model {
            ScoringModel::Binary => self.fold_binary(run, rules),
            ScoringModel::Scored => self.fold_scored(run),
        }
    }

    fn fold_binary(&mut self, run: &Run, rules: &ScoringRules) {
        // Acceptance is terminal: later runs are audit-only.
        if self.accepted {
            return;
        }

        match run.result {
            RunResult::Pending => {
                self.pending = true;
            }
            RunResult::Rejected => {
                self.attempts += 1;
                self.pending = false;
            }
            RunResult::Accepted => {
                self.attempts += 1;
                self.accepted = true;
                self.pending = false;
                self.accepted_at = Some(run.time);
                self.penalty =
                    (self.attempts as i64 - 1) * rules.penalty_minutes + run.time;
            }
        }
    }

    fn fold_scored(&mut self, run: &Run) {
        match run.result {
            RunResult::Pending => {
                self.pending = true;
            }
            RunResult::Rejected | RunResult::Accepted => {
                self.pending = false;
                if run.score > self.best_score {
                    self.best_score = run.score;
                }
            }
        }
    }

    /// Whether a Binary acceptance has been recorded
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Whether an undisclosed run is outstanding
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Count of judged Binary runs folded so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Wrong attempts before (or without) acceptance
    pub fn failed_attempts(&self) -> u32 {
        if self.accepted {
            self.attempts.saturating_sub(1)
        } else {
            self.attempts
        }
    }

    /// Best partial score seen so far (Scored problems)
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Penalty minutes frozen at acceptance; 0 while unsolved
    pub fn penalty(&self) -> i64 {
        self.penalty
    }

    /// Contest minute of the accepting run
    pub fn accepted_at(&self) -> Option<i64> {
        self.accepted_at
    }

    /// Time of the last run folded into this cell
    pub fn last_seen(&self) -> Option<i64> {
        self.last_seen
    }

    /// Project this cell into renderer-facing display data.
    pub fn display(&self, model: ScoringModel, rules: &ScoringRules) -> CellDisplay {
        let accepted = match model {
            ScoringModel::Binary => self.accepted,
            ScoringModel::Scored => self.best_score > rules.scored_accept_threshold,
        };

        CellDisplay {
            accepted,
            pending: self.pending,
            failed_attempts: self.failed_attempts(),
            best_score: self.best_score,
            text: self.cell_text(model, accepted),
        }
    }

    // Cell text as the renderer paints it: "+"/"+k" solved, "-k" failed,
    // "?" undetermined, "+score" for partial credit.
    fn cell_text(&self, model: ScoringModel, accepted: bool) -> String {
        match model {
            ScoringModel::Scored => {
                if accepted {
                    format!("+{}", self.best_score)
                } else if self.pending {
                    CELL_TEXT_PENDING.to_string()
                } else {
                    String::new()
                }
            }
            ScoringModel::Binary => {
                if accepted {
                    let failed = self.failed_attempts();
                    if failed > 0 {
                        format!("+{}", failed)
                    } else {
                        "+".to_string()
                    }
                } else if self.pending {
                    CELL_TEXT_PENDING.to_string()
                } else if self.attempts > 0 {
                    format!("-{}", self.attempts)
                } else {
                    String::new()
                }
            }
        }
    }
}

/// Renderer-facing view of one scoreboard cell
#[derive(Debug, Clone, Serialize)]
pub struct CellDisplay {
    pub accepted: bool,
    pub pending: bool,
    pub failed_attempts: u32,
    pub best_score: f64,
    pub text: String,
}
