//! Ranking comparator and dense competition rank

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::run::TeamId;

/// Per-team totals derived from the cell arena, input to ranking
#[derive(Debug, Clone, Copy)]
pub struct TeamTotals {
    pub team_id: TeamId,
    pub solved: u32,
    pub penalty: i64,
    pub score: f64,
}

/// One row of the published ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub team_id: TeamId,
    pub rank: u32,
    pub total_solved: u32,
    pub total_penalty: i64,
    pub total_score: f64,
}

// Ranking key: solved desc, penalty asc, partial-credit score desc.
// The score component only separates teams in contests that carry Scored
// problems; in an all-Binary contest every total_score is 0.0.
fn compare_totals(a: &TeamTotals, b: &TeamTotals) -> Ordering {
    b.solved
        .cmp(&a.solved)
        .then_with(|| a.penalty.cmp(&b.penalty))
        .then_with(|| b.score.total_cmp(&a.score))
}

/// Order totals and assign competition ranks.
///
/// Teams with an identical ranking key share a rank; the next distinct key
/// receives `previous_rank + tie_group_size`. Team id ascending settles the
/// presentation order inside a tie group without affecting rank numbers.
pub fn rank_teams(mut totals: Vec<TeamTotals>) -> Vec<RankEntry> {
    totals.sort_by(|a, b| compare_totals(a, b).then_with(|| a.team_id.cmp(&b.team_id)));

    let mut entries = Vec::with_capacity(totals.len());
    let mut current_rank = 1u32;

    for (position, team) in totals.iter().enumerate() {
        if position > 0 && compare_totals(&totals[position - 1], team) != Ordering::Equal {
            current_rank = position as u32 + 1;
        }
        entries.push(RankEntry {
            team_id: team.team_id,
            rank: current_rank,
            total_solved: team.solved,
            total_penalty: team.penalty,
            total_score: team.score,
        });
    }

    entries
}
