#![allow(dead_code)]

use league_tracker::model::{GameResult, Lane, MatchRecord};

pub fn game(champion: &str, opponent: &str, result: Option<GameResult>) -> MatchRecord {
    MatchRecord {
        champion: champion.to_string(),
        opponent: opponent.to_string(),
        lane: Some(Lane::Mid),
        result,
        ..Default::default()
    }
}

pub fn win(champion: &str, opponent: &str) -> MatchRecord {
    game(champion, opponent, Some(GameResult::WonDecisively))
}

pub fn loss(champion: &str, opponent: &str) -> MatchRecord {
    game(champion, opponent, Some(GameResult::LostDecisively))
}
