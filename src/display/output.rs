use crate::analysis::aggregator::{PowerPick, WinLoss};
use crate::analysis::matchups::MatchupRow;
use crate::analysis::profile::ChampionProfile;
use crate::analysis::recommender::{Insight, InsightKind};
use crate::api::catalog::ChampionRef;
use crate::model::{GameResult, MatchRecord};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const HOT_WINRATE: u32 = 60;
const STREAK_BADGE_MIN: usize = 2;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    #[tabled(rename = "KDA / CS")]
    kda: String,
    lane: String,
    opponent: String,
    result: String,
    details: String,
}

#[derive(Tabled)]
struct PickRow {
    rank: String,
    champion: String,
    win_rate: String,
    games: String,
}

#[derive(Tabled)]
struct OpponentRow {
    opponent: String,
    games: String,
    win_rate: String,
}

#[derive(Tabled)]
struct OutcomeRow {
    result: String,
    games: String,
}

fn colored_result(result: Option<GameResult>) -> String {
    match result {
        Some(r) if r.is_win() => r.label().green().to_string(),
        Some(r) => r.label().red().to_string(),
        None => "-".dimmed().to_string(),
    }
}

fn colored_lp(lp: i64) -> String {
    let text = format!("{:+} LP", lp);
    if lp >= 0 {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

fn colored_winrate(winrate: u32) -> String {
    let text = format!("{}%", winrate);
    if winrate >= HOT_WINRATE {
        text.green().bold().to_string()
    } else {
        text
    }
}

/// `numbers` are the 1-based positions of `records` in the full history.
pub fn display_match_history(records: &[MatchRecord], numbers: &[usize]) {
    println!("\n{}", "📜 MY GAMES".bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());

    if records.is_empty() {
        println!("{}", "No games found. Log your first win!".yellow());
        return;
    }

    let mut rows = vec![];
    for (record, number) in records.iter().zip(numbers) {
        let mut details = vec![];
        if !record.duration.is_empty() {
            details.push(record.duration.clone());
        }
        if record.is_ranked {
            details.push(colored_lp(i64::from(record.lp_change)));
        }
        if let Some(tip) = &record.matchup_tip {
            details.push(format!("tip: {}", tip));
        }
        if let Some(note) = &record.note {
            details.push(note.clone());
        }

        rows.push(MatchRow {
            number: number.to_string(),
            champion: record.champion.clone(),
            kda: format!(
                "{}/{}/{} ({}) · {} cs",
                record.kills,
                record.deaths,
                record.assists,
                record.kda(),
                record.cs
            ),
            lane: record.lane.map(|l| l.to_string()).unwrap_or_default(),
            opponent: record.opponent.clone(),
            result: colored_result(record.result),
            details: details.join(" · "),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_summary(summary: &WinLoss, streak: usize, daily_lp: i64) {
    print!(
        "{} {}  {} {}  {} {}",
        "Wins:".bold(),
        summary.wins.to_string().green(),
        "Losses:".bold(),
        summary.losses.to_string().red(),
        "Winrate:".bold(),
        format!("{}%", summary.winrate_percent).blue()
    );
    if daily_lp != 0 {
        print!("  🏆 {} {}", "Today:".bold(), colored_lp(daily_lp));
    }
    if streak >= STREAK_BADGE_MIN {
        print!("  🔥 {}", format!("{} wins in a row", streak).yellow().bold());
    }
    println!("\n");
}

pub fn display_power_picks(picks: &[PowerPick]) {
    if picks.is_empty() {
        return;
    }

    println!("\n{}", "⚡ POWER PICKS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<PickRow> = picks
        .iter()
        .enumerate()
        .map(|(idx, pick)| PickRow {
            rank: format!("#{}", idx + 1),
            champion: pick.champion.clone(),
            win_rate: colored_winrate(pick.winrate_percent),
            games: pick.total_games.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_matchups(matchups: &[MatchupRow]) {
    if matchups.is_empty() {
        return;
    }

    println!("\n{}", "⚔️  TOP MATCHUPS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<OpponentRow> = matchups
        .iter()
        .map(|m| OpponentRow {
            opponent: m.opponent.clone(),
            games: m.total_games.to_string(),
            win_rate: format!("{}%", m.winrate_percent),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_result_distribution(distribution: &[(GameResult, usize)]) {
    if distribution.is_empty() {
        return;
    }

    println!("\n{}", "📊 RESULTS BREAKDOWN".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<OutcomeRow> = distribution
        .iter()
        .map(|(outcome, games)| OutcomeRow {
            result: colored_result(Some(*outcome)),
            games: games.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_profile(profile: &ChampionProfile, catalog_entry: Option<&ChampionRef>) {
    let title = catalog_entry
        .map(|c| c.display_name.clone())
        .unwrap_or_else(|| profile.champion.clone());

    println!("\n{}", format!("🎯 {} · Performance Profile", title).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if let Some(entry) = catalog_entry {
        println!("  {} {}", "Portrait:".dimmed(), entry.image_url.dimmed());
    }

    let (kills, deaths, assists) = profile.average_line();
    println!(
        "  {} {} ({})",
        "Winrate:".bold(),
        colored_winrate(profile.winrate_percent),
        profile.record_line()
    );
    println!(
        "  {} {} ({} / {} / {} per game)",
        "KDA:".bold(),
        profile.kda,
        kills,
        deaths,
        assists
    );
    match &profile.hardest_counter {
        Some(counter) => println!(
            "  {} {} ({}% losses over {} games)",
            "Counter pick:".bold(),
            counter.opponent.red(),
            counter.lossrate_percent,
            counter.games
        ),
        None => println!("  {} N/A", "Counter pick:".bold()),
    }
    println!("  {} {}\n", "Total games:".bold(), profile.total_games);
}

pub fn display_insight(insight: &Insight) {
    let header = match insight.kind {
        InsightKind::Info => "💡 Coach".bold().blue(),
        InsightKind::Neutral => "🧭 Coach".bold().yellow(),
        InsightKind::Positive => "🚀 Coach".bold().green(),
    };
    println!("\n{} {}", header, insight.champion.bold());
    println!("{}\n", "=".repeat(60).cyan());
    println!("  {}\n", insight.recommendation);

    if let Some(metrics) = &insight.metrics {
        print!(
            "  {} {}%  {} {:.1}  {} {}",
            "WR:".bold(),
            metrics.winrate_percent,
            "Deaths:".bold(),
            metrics.avg_deaths,
            "CS:".bold(),
            metrics.avg_cs
        );
        if let Some(minutes) = metrics.avg_duration_minutes {
            print!("  {} {}m", "Length:".bold(), minutes);
        }
        println!("  ({} games)\n", metrics.games);
    }

    for item in &insight.checklist {
        println!("  {} {}", "☐".cyan(), item);
    }
    println!();
}

/// `active` is the stored key of the current player.
pub fn display_users(users: &[String], active: &str) {
    if users.is_empty() {
        println!("{}", "No saved players yet".yellow());
        return;
    }
    for user in users {
        if user == active {
            println!("{} {}", "▶".green(), user.bold());
        } else {
            println!("  {}", user);
        }
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
