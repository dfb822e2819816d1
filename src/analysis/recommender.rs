use tracing::debug;

use super::{percent, round_div};
use crate::model::MatchRecord;

const MIN_GAMES: usize = 2;
const POSITIVE_WINRATE: u32 = 55;
const SAFE_LANE_BELOW_WINRATE: u32 = 50;
/// Average deaths, in tenths.
const HIGH_DEATHS_TENTHS: u64 = 60;
const CS_TARGET_BONUS: u32 = 10;
const RECOMMENDATION_ITEMS: usize = 2;
const CHECKLIST_ITEMS: usize = 3;
const SEPARATOR: &str = " · ";

pub const NOT_ENOUGH_DATA: &str =
    "Not enough games on this champion yet. Log at least two to get matchup advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    /// Too little history to say anything.
    Info,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightMetrics {
    pub games: usize,
    pub winrate_percent: u32,
    pub avg_cs: u32,
    /// One decimal.
    pub avg_deaths: f64,
    pub avg_duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub champion: String,
    pub recommendation: String,
    pub checklist: Vec<String>,
    pub metrics: Option<InsightMetrics>,
}

pub struct InsightEngine;

impl InsightEngine {
    /// Coaching for the champion currently being drafted, from past games on
    /// it. The champion lookup ignores case.
    pub fn compute(draft_champion: &str, records: &[MatchRecord]) -> Option<Insight> {
        let champion = draft_champion.trim();
        if champion.is_empty() || records.is_empty() {
            return None;
        }

        let wanted = champion.to_lowercase();
        let history: Vec<&MatchRecord> = records
            .iter()
            .filter(|r| r.champion.to_lowercase() == wanted)
            .collect();

        if history.len() < MIN_GAMES {
            return Some(Insight {
                kind: InsightKind::Info,
                champion: champion.to_string(),
                recommendation: NOT_ENOUGH_DATA.to_string(),
                checklist: Vec::new(),
                metrics: None,
            });
        }

        let metrics = Self::metrics(&history);
        let advice = Self::checklist(champion, &metrics);
        let kind = if metrics.winrate_percent >= POSITIVE_WINRATE {
            InsightKind::Positive
        } else {
            InsightKind::Neutral
        };

        debug!(
            champion,
            games = metrics.games,
            winrate = metrics.winrate_percent,
            "Computed draft insight"
        );

        Some(Insight {
            kind,
            champion: champion.to_string(),
            recommendation: advice
                .iter()
                .take(RECOMMENDATION_ITEMS)
                .cloned()
                .collect::<Vec<_>>()
                .join(SEPARATOR),
            checklist: advice.into_iter().take(CHECKLIST_ITEMS).collect(),
            metrics: Some(metrics),
        })
    }

    fn metrics(history: &[&MatchRecord]) -> InsightMetrics {
        let games = history.len();
        let n = games as u64;
        let wins = history.iter().filter(|r| r.is_win()).count();
        let total_cs: u64 = history.iter().map(|r| u64::from(r.cs)).sum();
        let total_deaths: u64 = history.iter().map(|r| u64::from(r.deaths)).sum();

        let durations: Vec<u64> = history
            .iter()
            .filter_map(|r| r.duration_secs())
            .map(u64::from)
            .collect();
        let avg_duration_minutes = if durations.is_empty() {
            None
        } else {
            let total_secs: u64 = durations.iter().sum();
            Some(round_div(total_secs, durations.len() as u64 * 60) as u32)
        };

        InsightMetrics {
            games,
            winrate_percent: percent(wins, games),
            avg_cs: round_div(total_cs, n) as u32,
            avg_deaths: round_div(total_deaths * 10, n) as f64 / 10.0,
            avg_duration_minutes,
        }
    }

    /// Advice in priority order. The laning line always comes first.
    fn checklist(champion: &str, metrics: &InsightMetrics) -> Vec<String> {
        let mut advice = Vec::new();

        if metrics.winrate_percent < SAFE_LANE_BELOW_WINRATE {
            advice.push(format!(
                "Play {} safe: farm under tower and wait for your jungler before trading",
                champion
            ));
        } else {
            advice.push(format!(
                "You win on {}: take early trades and press your lane lead",
                champion
            ));
        }

        if (metrics.avg_deaths * 10.0).round() as u64 >= HIGH_DEATHS_TENTHS {
            advice.push(format!(
                "You average {:.1} deaths here: ward before extending and track the enemy jungler",
                metrics.avg_deaths
            ));
        }

        if metrics.avg_cs > 0 {
            advice.push(format!(
                "Farm target: {} CS this game",
                metrics.avg_cs + CS_TARGET_BONUS
            ));
        }

        if let Some(minutes) = metrics.avg_duration_minutes {
            advice.push(format!(
                "Your games last about {} minutes: plan item spikes around that",
                minutes
            ));
        }

        advice
    }
}
