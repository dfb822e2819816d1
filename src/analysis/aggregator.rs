use chrono::NaiveDate;
use tracing::debug;

use super::champion_stats::ChampionStatsTracker;
use super::percent;
use crate::model::{GameResult, MatchRecord};

const POWER_PICK_MIN_GAMES: usize = 2;
const POWER_PICK_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLoss {
    pub wins: usize,
    pub losses: usize,
    /// Every record given, including ones without a recognised result.
    pub total: usize,
    pub winrate_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerPick {
    pub champion: String,
    pub winrate_percent: u32,
    pub total_games: usize,
}

/// Consecutive wins counted back from the most recent record.
pub fn current_streak(records: &[MatchRecord]) -> usize {
    records.iter().rev().take_while(|r| r.is_win()).count()
}

/// Net LP from ranked games created on `today` (local calendar day).
/// Records without a usable creation time never count as today.
pub fn daily_lp(records: &[MatchRecord], today: NaiveDate) -> i64 {
    records
        .iter()
        .filter(|r| r.is_ranked && r.played_on() == Some(today))
        .map(|r| i64::from(r.lp_change))
        .sum()
}

pub fn win_loss(records: &[MatchRecord]) -> WinLoss {
    let wins = records.iter().filter(|r| r.is_win()).count();
    let losses = records.iter().filter(|r| r.is_loss()).count();
    let total = records.len();

    WinLoss {
        wins,
        losses,
        total,
        winrate_percent: percent(wins, total),
    }
}

/// Up to three best-performing champions with at least two games, by win
/// rate and then sample size.
pub fn power_picks(records: &[MatchRecord]) -> Vec<PowerPick> {
    let tracker = ChampionStatsTracker::from_records(records, |r| r.champion.as_str());

    let mut picks: Vec<PowerPick> = tracker
        .into_stats()
        .into_iter()
        .filter(|s| s.games >= POWER_PICK_MIN_GAMES)
        .map(|s| PowerPick {
            winrate_percent: s.winrate_percent(),
            total_games: s.games,
            champion: s.name,
        })
        .collect();

    picks.sort_by(|a, b| {
        b.winrate_percent
            .cmp(&a.winrate_percent)
            .then(b.total_games.cmp(&a.total_games))
    });
    picks.truncate(POWER_PICK_LIMIT);

    debug!(records = records.len(), picks = picks.len(), "Computed power picks");
    picks
}

/// Games per outcome, in outcome order, skipping outcomes never logged.
pub fn result_distribution(records: &[MatchRecord]) -> Vec<(GameResult, usize)> {
    GameResult::ALL
        .into_iter()
        .map(|outcome| {
            let games = records.iter().filter(|r| r.result == Some(outcome)).count();
            (outcome, games)
        })
        .filter(|(_, games)| *games > 0)
        .collect()
}
