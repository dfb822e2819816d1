use tracing::debug;

use super::champion_stats::{ChampionStats, ChampionStatsTracker};
use super::{percent, round_div};
use crate::model::{Kda, MatchRecord};

/// The opponent the user loses to most often on a champion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub opponent: String,
    pub lossrate_percent: u32,
    pub games: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionProfile {
    pub champion: String,
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub winrate_percent: u32,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub kda: Kda,
    pub hardest_counter: Option<Counter>,
}

impl ChampionProfile {
    /// Deep-dive stats for the games played on exactly `champion`.
    /// `None` when there are none.
    pub fn compute(records: &[MatchRecord], champion: &str) -> Option<Self> {
        let games: Vec<&MatchRecord> = records.iter().filter(|r| r.champion == champion).collect();
        if games.is_empty() {
            return None;
        }

        let total_games = games.len();
        let wins = games.iter().filter(|r| r.is_win()).count();
        let losses = games.iter().filter(|r| r.is_loss()).count();
        let kills: u64 = games.iter().map(|r| u64::from(r.kills)).sum();
        let deaths: u64 = games.iter().map(|r| u64::from(r.deaths)).sum();
        let assists: u64 = games.iter().map(|r| u64::from(r.assists)).sum();

        let opponents =
            ChampionStatsTracker::from_records(games.iter().copied(), |r| r.opponent.as_str());
        let hardest_counter = hardest(opponents.get_stats()).map(|s| Counter {
            opponent: s.name.clone(),
            lossrate_percent: s.lossrate_percent(),
            games: s.games,
        });

        debug!(champion, total_games, "Computed champion profile");

        Some(ChampionProfile {
            champion: champion.to_string(),
            total_games,
            wins,
            losses,
            winrate_percent: percent(wins, total_games),
            kills,
            deaths,
            assists,
            kda: Kda::from_totals(kills, deaths, assists),
            hardest_counter,
        })
    }

    /// `"3W - 1L"`. Games without a recognised result are in neither count.
    pub fn record_line(&self) -> String {
        format!("{}W - {}L", self.wins, self.losses)
    }

    /// Rounded per-game kills, deaths and assists.
    pub fn average_line(&self) -> (u64, u64, u64) {
        let games = self.total_games as u64;
        (
            round_div(self.kills, games),
            round_div(self.deaths, games),
            round_div(self.assists, games),
        )
    }
}

/// Highest loss rate wins; the earliest opponent keeps a tie.
fn hardest(opponents: &[ChampionStats]) -> Option<&ChampionStats> {
    let mut best: Option<&ChampionStats> = None;
    for candidate in opponents {
        let beats = match best {
            None => true,
            // losses_c / games_c > losses_b / games_b, without division
            Some(b) => candidate.losses * b.games > b.losses * candidate.games,
        };
        if beats {
            best = Some(candidate);
        }
    }
    best
}
