use std::collections::HashMap;

use super::percent;
use crate::model::{GameResult, MatchRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionStats {
    pub name: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
}

impl ChampionStats {
    pub fn new(name: String) -> Self {
        ChampionStats {
            name,
            games: 0,
            wins: 0,
            losses: 0,
        }
    }

    pub fn winrate_percent(&self) -> u32 {
        percent(self.wins, self.games)
    }

    pub fn lossrate_percent(&self) -> u32 {
        percent(self.losses, self.games)
    }
}

/// Per-champion tallies keyed by exact name, kept in first-seen order so
/// stable sorts over them break ties by history order.
#[derive(Debug, Default)]
pub struct ChampionStatsTracker {
    stats: Vec<ChampionStats>,
    index: HashMap<String, usize>,
}

impl ChampionStatsTracker {
    pub fn new() -> Self {
        ChampionStatsTracker::default()
    }

    /// Tally `records` under the champion name `key` picks out of each one.
    pub fn from_records<'a, I, F>(records: I, key: F) -> Self
    where
        I: IntoIterator<Item = &'a MatchRecord>,
        F: Fn(&MatchRecord) -> &str,
    {
        let mut tracker = ChampionStatsTracker::new();
        for record in records {
            tracker.add_game(key(record), record.result);
        }
        tracker
    }

    pub fn add_game(&mut self, champion_name: &str, result: Option<GameResult>) {
        let slot = match self.index.get(champion_name) {
            Some(&slot) => slot,
            None => {
                self.stats.push(ChampionStats::new(champion_name.to_string()));
                self.index
                    .insert(champion_name.to_string(), self.stats.len() - 1);
                self.stats.len() - 1
            }
        };

        let entry = &mut self.stats[slot];
        entry.games += 1;
        match result {
            Some(r) if r.is_win() => entry.wins += 1,
            Some(_) => entry.losses += 1,
            None => {}
        }
    }

    pub fn get_stats(&self) -> &[ChampionStats] {
        &self.stats
    }

    pub fn into_stats(self) -> Vec<ChampionStats> {
        self.stats
    }
}
