//! Scoreboard core
//!
//! Live standings aggregation plus the frozen-scoreboard award ceremony.
//! [`ContestBoard`] is the composition root: it splits the run feed at the
//! freeze time, folds the visible pool into the [`StandingsEngine`], masks
//! the hidden pool as pending placeholders, and drives the
//! [`RevealState`] one externally triggered step at a time.

pub mod cell;
pub mod rank;
pub mod reveal;
pub mod standings;

pub use cell::CellDisplay;
pub use rank::RankEntry;
pub use reveal::{RevealStep, RevealState};
pub use standings::StandingsEngine;

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{
        contest::{ContestConfig, ProblemInfo, TeamInfo},
        run::{ProblemId, Run, TeamId},
    },
};

/// Scoring knobs shared by every cell fold.
#[derive(Debug, Clone, Copy)]
pub struct ScoringRules {
    /// Penalty minutes added per wrong attempt on a solved problem
    pub penalty_minutes: i64,
    /// Best score above which a Scored problem displays as accepted
    pub scored_accept_threshold: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            penalty_minutes: crate::constants::DEFAULT_PENALTY_MINUTES,
            scored_accept_threshold: crate::constants::DEFAULT_SCORED_ACCEPT_THRESHOLD,
        }
    }
}

/// One loaded contest view: standings plus, in award mode, the reveal
/// sequencer over the post-freeze run pool.
pub struct ContestBoard {
    title: String,
    engine: StandingsEngine,
    reveal: Option<RevealState>,
    award_mode: bool,
    loaded_at: DateTime<Utc>,
}

impl ContestBoard {
    /// Build a board from a contest configuration.
    ///
    /// Runs are sorted by `(time, id)` before folding, so feeds that arrive
    /// unsorted are tolerated at this boundary; the engine still rejects
    /// regressions per cell. With `award_mode` and a freeze time set, runs
    /// at or after the freeze are withheld for the ceremony and folded in
    /// as pending placeholders so their cells render undetermined.
    pub fn initialize(
        config: ContestConfig,
        award_mode: bool,
        rules: ScoringRules,
    ) -> AppResult<Self> {
        config.validate()?;

        let ContestConfig {
            title,
            teams,
            problems,
            mut runs,
            freeze_time,
        } = config;

        let mut engine = StandingsEngine::new(teams, problems, rules)?;
        runs.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.id.cmp(&b.id)));

        let reveal = if award_mode && let Some(freeze) = freeze_time {
            let (visible, hidden): (Vec<Run>, Vec<Run>) =
                runs.into_iter().partition(|run| run.time < freeze);

            for run in &visible {
                engine.ingest(run)?;
            }
            for run in &hidden {
                engine.ingest(&run.masked())?;
            }

            tracing::info!(
                title = %title,
                visible = visible.len(),
                hidden = hidden.len(),
                freeze_time = freeze,
                "board loaded frozen for award ceremony"
            );
            Some(RevealState::new(hidden))
        } else {
            for run in &runs {
                engine.ingest(run)?;
            }
            tracing::info!(title = %title, runs = runs.len(), "board loaded");
            None
        };

        Ok(Self {
            title,
            engine,
            reveal,
            award_mode,
            loaded_at: Utc::now(),
        })
    }

    /// Current ranking, recomputed from state.
    pub fn ranked_teams(&self) -> Vec<RankEntry> {
        self.engine.ranked_teams()
    }

    /// Display data for one cell.
    pub fn problem_display(&self, team_id: TeamId, problem_id: ProblemId) -> AppResult<CellDisplay> {
        self.engine.cell_display(team_id, problem_id)
    }

    /// Perform one reveal step.
    ///
    /// Only valid on a board loaded in award mode with a freeze time;
    /// harmless no-op once the ceremony is complete.
    pub fn advance(&mut self) -> AppResult<RevealStep> {
        let state = self
            .reveal
            .clone()
            .ok_or_else(|| AppError::Conflict("Board has no reveal ceremony".to_string()))?;

        let (next, step) = state.advance(&mut self.engine)?;
        self.reveal = Some(next);
        Ok(step)
    }

    /// Contest title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the board was loaded for an award ceremony
    pub fn award_mode(&self) -> bool {
        self.award_mode
    }

    /// Whether any runs are still hidden
    pub fn is_frozen(&self) -> bool {
        self.hidden_count() > 0
    }

    /// Runs still hidden from the standings
    pub fn hidden_count(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealState::hidden_count)
    }

    /// Teams already finalized by the ceremony
    pub fn finalized_count(&self) -> usize {
        self.reveal.as_ref().map_or(0, RevealState::finalized_count)
    }

    /// Current reveal cursor
    pub fn focused_team(&self) -> Option<TeamId> {
        self.reveal.as_ref().and_then(RevealState::focused)
    }

    /// Whether the ceremony has finalized the given team
    pub fn team_finalized(&self, team_id: TeamId) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|state| state.is_finalized(team_id))
    }

    /// Whether the ceremony has finished
    pub fn reveal_complete(&self) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|state| state.is_complete(self.engine.team_count()))
    }

    /// When the board was loaded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Registered teams in config order
    pub fn teams(&self) -> &[TeamInfo] {
        self.engine.teams()
    }

    /// Problems in scoreboard column order
    pub fn problems(&self) -> &[ProblemInfo] {
        self.engine.problems()
    }
}
