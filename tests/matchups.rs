mod common;

use common::{loss, win};
use league_tracker::analysis::matchups::{matchup_table, MatchupRow};
use league_tracker::model::MatchRecord;

fn games_against(counts: &[(&str, usize)]) -> Vec<MatchRecord> {
    let mut records = Vec::new();
    for (opponent, games) in counts {
        for i in 0..*games {
            // first game against each opponent is a win
            if i == 0 {
                records.push(win("Ahri", opponent));
            } else {
                records.push(loss("Ahri", opponent));
            }
        }
    }
    records
}

#[test]
fn test_five_opponents_ordered_by_games() {
    let records = games_against(&[("Akali", 2), ("Zed", 5), ("Lux", 1), ("Yasuo", 4), ("Syndra", 3)]);

    let table = matchup_table(&records);
    let order: Vec<_> = table.iter().map(|r| (r.opponent.as_str(), r.total_games)).collect();
    assert_eq!(
        order,
        [("Zed", 5), ("Yasuo", 4), ("Syndra", 3), ("Akali", 2), ("Lux", 1)]
    );
    assert_eq!(
        table[0],
        MatchupRow { opponent: "Zed".into(), winrate_percent: 20, total_games: 5 }
    );
    assert_eq!(table[4].winrate_percent, 100);
}

#[test]
fn test_sixth_opponent_is_dropped() {
    let records = games_against(&[
        ("Zed", 6),
        ("Yasuo", 5),
        ("Syndra", 4),
        ("Akali", 3),
        ("Lux", 2),
        ("Annie", 1),
    ]);

    let table = matchup_table(&records);
    assert_eq!(table.len(), 5);
    assert!(table.iter().all(|r| r.opponent != "Annie"));
}

#[test]
fn test_ties_keep_first_seen_order() {
    let records = vec![
        win("Ahri", "Zed"),
        win("Ahri", "Lux"),
        loss("Ahri", "Yasuo"),
        loss("Ahri", "Lux"),
        win("Ahri", "Zed"),
    ];

    let order: Vec<_> = matchup_table(&records).into_iter().map(|r| r.opponent).collect();
    assert_eq!(order, ["Zed", "Lux", "Yasuo"]);
}

#[test]
fn test_empty_history_has_no_matchups() {
    assert!(matchup_table(&[]).is_empty());
}
