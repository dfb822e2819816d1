use super::champion_stats::ChampionStatsTracker;
use crate::model::MatchRecord;

const MATCHUP_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupRow {
    pub opponent: String,
    pub winrate_percent: u32,
    pub total_games: usize,
}

/// The five most-played opponents with the win rate against each.
/// Equal game counts keep the order the opponents first appear in.
pub fn matchup_table(records: &[MatchRecord]) -> Vec<MatchupRow> {
    let tracker = ChampionStatsTracker::from_records(records, |r| r.opponent.as_str());

    let mut rows: Vec<MatchupRow> = tracker
        .into_stats()
        .into_iter()
        .map(|s| MatchupRow {
            winrate_percent: s.winrate_percent(),
            total_games: s.games,
            opponent: s.name,
        })
        .collect();

    rows.sort_by(|a, b| b.total_games.cmp(&a.total_games));
    rows.truncate(MATCHUP_LIMIT);
    rows
}
