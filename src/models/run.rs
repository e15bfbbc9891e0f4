//! Judged-submission events (runs)

use serde::{Deserialize, Serialize};

/// Team ID type (as assigned by the contest feed)
pub type TeamId = u32;

/// Problem ID type
pub type ProblemId = u32;

/// Run ID type
pub type RunId = u32;

/// Verdict attached to a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    /// Submission judged correct
    Accepted,
    /// Submission judged incorrect
    Rejected,
    /// Verdict not yet disclosed (queued, or masked behind the freeze)
    Pending,
}

impl RunResult {
    /// Get verdict as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
        }
    }

    /// Check if this verdict is final (judging complete and disclosed)
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for RunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a problem is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringModel {
    /// ICPC-style accept/reject with attempt counting
    Binary,
    /// Continuous partial credit; best score is retained
    Scored,
}

impl std::fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Scored => write!(f, "scored"),
        }
    }
}

/// One judged submission event, immutable once loaded.
///
/// `time` is elapsed contest time in whole minutes. Runs for a given
/// (team, problem) must be folded in ascending `time` order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub team_id: TeamId,
    pub problem_id: ProblemId,
    pub time: i64,
    pub result: RunResult,
    #[serde(default)]
    pub score: f64,
    pub scoring_model: ScoringModel,
}

impl Run {
    /// Copy of this run with the verdict masked as pending.
    ///
    /// Used to make frozen cells render as undetermined before the reveal.
    pub fn masked(&self) -> Run {
        Run {
            result: RunResult::Pending,
            score: 0.0,
            ..*self
        }
    }
}
