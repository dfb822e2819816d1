mod common;

use chrono::{Local, NaiveDate, TimeZone};
use common::{game, loss, win};
use league_tracker::analysis::aggregator::{
    current_streak, daily_lp, power_picks, result_distribution, win_loss, PowerPick,
};
use league_tracker::analysis::filter::RecordFilter;
use league_tracker::model::{GameResult, Lane, MatchRecord};

fn millis_at(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

fn ranked(id: Option<i64>, lp: i32) -> MatchRecord {
    MatchRecord {
        id,
        is_ranked: true,
        lp_change: lp,
        ..win("Ahri", "Zed")
    }
}

#[test]
fn test_streak_of_empty_history_is_zero() {
    assert_eq!(current_streak(&[]), 0);
}

#[test]
fn test_streak_counts_trailing_wins_only() {
    let records = vec![
        win("Ahri", "Zed"),
        win("Ahri", "Zed"),
        loss("Ahri", "Zed"),
        win("Lux", "Syndra"),
        game("Lux", "Syndra", Some(GameResult::WonNarrowly)),
        win("Ahri", "Yasuo"),
    ];
    assert_eq!(current_streak(&records), 3);
}

#[test]
fn test_streak_stops_at_missing_result() {
    let records = vec![win("Ahri", "Zed"), game("Ahri", "Zed", None), win("Ahri", "Zed")];
    assert_eq!(current_streak(&records), 1);

    let records = vec![win("Ahri", "Zed"), loss("Ahri", "Zed")];
    assert_eq!(current_streak(&records), 0);
}

#[test]
fn test_daily_lp_sums_todays_ranked_games() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let records = vec![
        ranked(Some(millis_at(2024, 3, 9, 22)), 40),
        ranked(Some(millis_at(2024, 3, 10, 9)), 21),
        ranked(Some(millis_at(2024, 3, 10, 18)), -17),
        MatchRecord {
            is_ranked: false,
            ..ranked(Some(millis_at(2024, 3, 10, 19)), 99)
        },
    ];

    assert_eq!(daily_lp(&records, today), 4);
}

#[test]
fn test_daily_lp_ignores_records_without_timestamp() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let records = vec![ranked(None, 25), ranked(Some(millis_at(2024, 3, 10, 12)), -5)];

    assert_eq!(daily_lp(&records, today), -5);
    assert_eq!(daily_lp(&[], today), 0);
}

#[test]
fn test_win_loss_counts_unknown_results_in_total_only() {
    let records = vec![
        win("Ahri", "Zed"),
        game("Ahri", "Zed", Some(GameResult::LostClose)),
        game("Ahri", "Zed", None),
    ];

    let summary = win_loss(&records);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.winrate_percent, 33);
}

#[test]
fn test_win_loss_of_empty_history() {
    let summary = win_loss(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.winrate_percent, 0);
}

#[test]
fn test_power_picks_rank_by_winrate_then_games() {
    let records = vec![
        win("Ahri", "Zed"),
        win("Ahri", "Zed"),
        loss("Ahri", "Zed"),
        win("Lux", "Zed"),
        win("Lux", "Zed"),
        win("Garen", "Darius"),
        win("Garen", "Darius"),
        win("Garen", "Darius"),
        loss("Teemo", "Darius"),
        loss("Teemo", "Darius"),
        win("Yasuo", "Zed"),
    ];

    let picks = power_picks(&records);
    assert_eq!(
        picks,
        vec![
            PowerPick { champion: "Garen".into(), winrate_percent: 100, total_games: 3 },
            PowerPick { champion: "Lux".into(), winrate_percent: 100, total_games: 2 },
            PowerPick { champion: "Ahri".into(), winrate_percent: 67, total_games: 3 },
        ]
    );
}

#[test]
fn test_power_picks_group_by_exact_name() {
    let records = vec![win("Ahri", "Zed"), win("ahri", "Zed")];
    assert!(power_picks(&records).is_empty());
}

#[test]
fn test_result_distribution_skips_unplayed_outcomes() {
    let records = vec![
        loss("Ahri", "Zed"),
        win("Ahri", "Zed"),
        loss("Ahri", "Zed"),
        game("Ahri", "Zed", None),
    ];

    assert_eq!(
        result_distribution(&records),
        vec![(GameResult::WonDecisively, 1), (GameResult::LostDecisively, 2)]
    );
}

#[test]
fn test_filter_preserves_order_and_combines_fields() {
    let mut top = win("Garen", "Darius");
    top.lane = Some(Lane::Top);
    let records = vec![
        win("Ahri", "Zed"),
        top,
        loss("Ahri", "Syndra"),
        win("Kai'Sa", "Jhin"),
    ];

    let by_name = RecordFilter {
        champion: Some("AH".to_string()),
        ..Default::default()
    };
    let opponents: Vec<_> = by_name.apply(&records).into_iter().map(|r| r.opponent).collect();
    assert_eq!(opponents, ["Zed", "Syndra"]);

    let combined = RecordFilter {
        lane: Some(Lane::Mid),
        champion: Some("ahri".to_string()),
        result: Some(GameResult::WonDecisively),
    };
    assert_eq!(combined.apply(&records), vec![records[0].clone()]);

    let by_lane = RecordFilter {
        lane: Some(Lane::Top),
        ..Default::default()
    };
    assert_eq!(by_lane.apply(&records).len(), 1);
    assert!(RecordFilter::default().is_empty());
    assert_eq!(RecordFilter::default().apply(&records), records);
}
