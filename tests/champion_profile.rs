mod common;

use common::{game, loss, win};
use league_tracker::analysis::profile::{ChampionProfile, Counter};
use league_tracker::model::{GameResult, MatchRecord};

fn with_kda(record: MatchRecord, kills: u32, deaths: u32, assists: u32) -> MatchRecord {
    MatchRecord {
        kills,
        deaths,
        assists,
        ..record
    }
}

#[test]
fn test_profile_is_none_without_games() {
    let records = vec![win("Lux", "Zed")];
    assert!(ChampionProfile::compute(&records, "Ahri").is_none());
    assert!(ChampionProfile::compute(&[], "Ahri").is_none());
}

#[test]
fn test_profile_matches_exact_name_only() {
    let records = vec![win("ahri", "Zed"), win("Ahri", "Zed")];
    let profile = ChampionProfile::compute(&records, "Ahri").unwrap();
    assert_eq!(profile.total_games, 1);
}

#[test]
fn test_two_game_profile() {
    let records = vec![
        MatchRecord {
            deaths: 2,
            cs: 180,
            ..game("Ahri", "Zed", Some(GameResult::WonDecisively))
        },
        MatchRecord {
            deaths: 8,
            cs: 150,
            ..game("Ahri", "Yasuo", Some(GameResult::LostClose))
        },
    ];

    let profile = ChampionProfile::compute(&records, "Ahri").unwrap();
    assert_eq!(profile.total_games, 2);
    assert_eq!(profile.wins, 1);
    assert_eq!(profile.losses, 1);
    assert_eq!(profile.winrate_percent, 50);
    assert_eq!(
        profile.hardest_counter,
        Some(Counter { opponent: "Yasuo".into(), lossrate_percent: 100, games: 1 })
    );
}

#[test]
fn test_kda_uses_totals() {
    let records = vec![
        with_kda(win("Ahri", "Zed"), 10, 2, 5),
        with_kda(loss("Ahri", "Zed"), 2, 4, 3),
    ];

    let profile = ChampionProfile::compute(&records, "Ahri").unwrap();
    assert_eq!((profile.kills, profile.deaths, profile.assists), (12, 6, 8));
    assert_eq!(profile.kda.ratio, 3.33);
    assert!(!profile.kda.deathless);
    assert_eq!(profile.average_line(), (6, 3, 4));
}

#[test]
fn test_deathless_kda_is_takedowns() {
    let records = vec![with_kda(win("Ahri", "Zed"), 7, 0, 4), with_kda(win("Ahri", "Lux"), 1, 0, 0)];

    let profile = ChampionProfile::compute(&records, "Ahri").unwrap();
    assert_eq!(profile.kda.ratio, 12.0);
    assert!(profile.kda.deathless);
    assert_eq!(profile.kda.to_string(), "12.00");
}

#[test]
fn test_hardest_counter_by_loss_rate() {
    let records = vec![
        loss("Ahri", "Zed"),
        win("Ahri", "Zed"),
        loss("Ahri", "Syndra"),
        loss("Ahri", "Syndra"),
        win("Ahri", "Syndra"),
        loss("Ahri", "Akali"),
    ];

    let counter = ChampionProfile::compute(&records, "Ahri")
        .unwrap()
        .hardest_counter
        .unwrap();
    assert_eq!(counter.opponent, "Akali");
    assert_eq!(counter.lossrate_percent, 100);
}

#[test]
fn test_hardest_counter_tie_goes_to_first_opponent() {
    let records = vec![
        win("Ahri", "Zed"),
        loss("Ahri", "Syndra"),
        loss("Ahri", "Zed"),
        win("Ahri", "Syndra"),
    ];

    let counter = ChampionProfile::compute(&records, "Ahri")
        .unwrap()
        .hardest_counter
        .unwrap();
    assert_eq!(counter.opponent, "Zed");
    assert_eq!(counter.lossrate_percent, 50);
}

#[test]
fn test_unknown_results_count_as_games_not_losses() {
    let records = vec![game("Ahri", "Zed", None), win("Ahri", "Lux")];

    let profile = ChampionProfile::compute(&records, "Ahri").unwrap();
    assert_eq!(profile.total_games, 2);
    assert_eq!(profile.losses, 0);
    assert_eq!(profile.winrate_percent, 50);
    assert_eq!(profile.record_line(), "1W - 0L");
    // nobody beat us, the first opponent still fills the slot
    assert_eq!(profile.hardest_counter.unwrap().lossrate_percent, 0);
}
