use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_tracker::analysis::aggregator::{current_streak, daily_lp, power_picks, result_distribution, win_loss};
use league_tracker::analysis::filter::RecordFilter;
use league_tracker::analysis::matchups::matchup_table;
use league_tracker::analysis::profile::ChampionProfile;
use league_tracker::analysis::recommender::InsightEngine;
use league_tracker::api::catalog::ChampionCatalog;
use league_tracker::api::client::DataDragonClient;
use league_tracker::config::Config;
use league_tracker::display::output::{
    display_champion_profile, display_error, display_info, display_insight, display_match_history,
    display_matchups, display_power_picks, display_result_distribution, display_success,
    display_summary, display_users,
};
use league_tracker::error::AppError;
use league_tracker::model::{GameResult, Lane, MatchRecord};
use league_tracker::store::{self, JsonFileRepository, MatchHistory, MatchRepository};

#[derive(Parser, Debug)]
#[command(name = "League Tracker")]
#[command(about = "Log your games and get stats and draft advice", long_about = None)]
struct Cli {
    /// Player whose history to use (default: TRACKER_USER or "Player 1")
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Directory holding saved histories (default: ~/.league_tracker)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log a new game
    Add(GameFields),

    /// Change the game at a position shown by `list`
    Edit {
        position: usize,
        #[command(flatten)]
        fields: GameFields,
    },

    /// Remove the game at a position shown by `list`
    Delete { position: usize },

    /// Show the game table with win/loss summary
    List {
        #[arg(short, long, value_enum)]
        lane: Option<Lane>,

        /// Case-insensitive part of the champion name
        #[arg(short, long)]
        champion: Option<String>,

        #[arg(short, long, value_enum)]
        result: Option<GameResult>,
    },

    /// Power picks, top matchups and results breakdown
    Stats,

    /// Performance profile for one champion (exact name)
    Champion {
        name: String,

        /// Look the champion up in the Data Dragon catalog
        #[arg(long)]
        catalog: bool,
    },

    /// Draft advice for the champion you are about to play
    Insight { champion: String },

    /// Replace the history with an exported JSON file
    Import {
        file: PathBuf,

        /// Confirm replacing the current history
        #[arg(long)]
        yes: bool,
    },

    /// Write the history to a JSON file
    Export { file: PathBuf },

    /// List players with a saved history
    Users,
}

#[derive(clap::Args, Debug)]
struct GameFields {
    #[arg(short, long)]
    champion: Option<String>,

    #[arg(short, long)]
    opponent: Option<String>,

    #[arg(short, long, value_enum)]
    lane: Option<Lane>,

    #[arg(short, long, value_enum)]
    result: Option<GameResult>,

    #[arg(short, long)]
    kills: Option<u32>,

    #[arg(short, long)]
    deaths: Option<u32>,

    #[arg(short, long)]
    assists: Option<u32>,

    #[arg(long)]
    cs: Option<u32>,

    /// Game length as MM:SS
    #[arg(long)]
    duration: Option<String>,

    /// Key advice for this matchup
    #[arg(long)]
    tip: Option<String>,

    #[arg(long)]
    note: Option<String>,

    #[arg(long)]
    ranked: bool,

    #[arg(long, conflicts_with = "ranked")]
    unranked: bool,

    /// LP gained or lost (ranked only)
    #[arg(long, allow_hyphen_values = true)]
    lp: Option<i32>,
}

impl GameFields {
    fn apply_to(self, record: &mut MatchRecord) {
        if let Some(champion) = self.champion {
            record.champion = champion;
        }
        if let Some(opponent) = self.opponent {
            record.opponent = opponent;
        }
        if self.lane.is_some() {
            record.lane = self.lane;
        }
        if self.result.is_some() {
            record.result = self.result;
        }
        if let Some(kills) = self.kills {
            record.kills = kills;
        }
        if let Some(deaths) = self.deaths {
            record.deaths = deaths;
        }
        if let Some(assists) = self.assists {
            record.assists = assists;
        }
        if let Some(cs) = self.cs {
            record.cs = cs;
        }
        if let Some(duration) = self.duration {
            record.duration = duration;
        }
        if let Some(tip) = self.tip {
            record.matchup_tip = Some(tip).filter(|t| !t.is_empty());
        }
        if let Some(note) = self.note {
            record.note = Some(note).filter(|n| !n.is_empty());
        }
        if self.ranked {
            record.is_ranked = true;
        }
        if self.unranked {
            record.is_ranked = false;
        }
        if let Some(lp) = self.lp {
            record.lp_change = lp;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_overrides(cli.user, cli.data_dir)?;
    let repository = JsonFileRepository::new(config.data_dir.clone());
    info!(user = %config.user, data_dir = %config.data_dir.display(), "Starting");

    let records = repository
        .load(&config.user)
        .with_context(|| format!("loading history for {}", config.user))?;
    let mut history = MatchHistory::new(records);

    match cli.command {
        Command::Add(fields) => {
            let mut record = MatchRecord::default();
            fields.apply_to(&mut record);
            resolve_names(&config, &mut record)?;
            if let Some(insight) = InsightEngine::compute(&record.champion, history.records()) {
                display_insight(&insight);
            }
            history.add(record)?;
            repository.save(&config.user, history.records())?;
            display_success(&format!("Game #{} saved", history.len()));
        }
        Command::Edit { position, fields } => {
            let index = to_index(position)?;
            let mut record = history
                .get(index)
                .cloned()
                .ok_or(AppError::RecordNotFound(position))?;
            fields.apply_to(&mut record);
            resolve_names(&config, &mut record)?;
            history.replace(index, record)?;
            repository.save(&config.user, history.records())?;
            display_success(&format!("Game #{} updated", position));
        }
        Command::Delete { position } => {
            let removed = history.remove(to_index(position)?)?;
            repository.save(&config.user, history.records())?;
            display_success(&format!(
                "Removed game #{} ({} vs {})",
                position, removed.champion, removed.opponent
            ));
        }
        Command::List {
            lane,
            champion,
            result,
        } => {
            let filter = RecordFilter {
                lane,
                champion,
                result,
            };
            let numbers: Vec<usize> = history
                .records()
                .iter()
                .enumerate()
                .filter(|(_, r)| filter.matches(r))
                .map(|(idx, _)| idx + 1)
                .collect();
            let shown = filter.apply(history.records());

            display_match_history(&shown, &numbers);
            display_summary(
                &win_loss(&shown),
                current_streak(history.records()),
                daily_lp(history.records(), chrono::Local::now().date_naive()),
            );
        }
        Command::Stats => {
            display_power_picks(&power_picks(history.records()));
            display_matchups(&matchup_table(history.records()));
            display_result_distribution(&result_distribution(history.records()));
        }
        Command::Champion { name, catalog } => {
            let profile = ChampionProfile::compute(history.records(), &name)
                .ok_or_else(|| anyhow::anyhow!("no games logged on {}", name))?;
            let entry = if catalog {
                fetch_catalog(&config)?.resolve(&name)
            } else {
                None
            };
            display_champion_profile(&profile, entry.as_ref());
        }
        Command::Insight { champion } => match InsightEngine::compute(&champion, history.records()) {
            Some(insight) => display_insight(&insight),
            None => display_info("Nothing to analyse yet"),
        },
        Command::Import { file, yes } => {
            let imported = store::import_file(&file)?;
            if !yes {
                display_info(&format!(
                    "{} contains {} games. Re-run with --yes to replace your {} current games.",
                    file.display(),
                    imported.len(),
                    history.len()
                ));
                return Ok(());
            }
            repository.save(&config.user, &imported)?;
            display_success(&format!("Imported {} games", imported.len()));
        }
        Command::Export { file } => {
            store::export_file(&file, history.records())
                .with_context(|| format!("writing {}", file.display()))?;
            display_success(&format!("Exported {} games to {}", history.len(), file.display()));
        }
        Command::Users => {
            display_users(
                &repository.users()?,
                &JsonFileRepository::user_key(&config.user),
            );
        }
    }

    Ok(())
}

fn to_index(position: usize) -> Result<usize, AppError> {
    position
        .checked_sub(1)
        .ok_or(AppError::RecordNotFound(position))
}

fn fetch_catalog(config: &Config) -> Result<ChampionCatalog, AppError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching champion catalog");
    pb.enable_steady_tick(Duration::from_millis(100));

    let catalog = DataDragonClient::new(&config.ddragon_version, &config.ddragon_lang).get_catalog();
    pb.finish_and_clear();
    catalog
}

/// Swap typed names for catalog ids when validation is on.
fn resolve_names(config: &Config, record: &mut MatchRecord) -> Result<(), AppError> {
    if !config.validate_champions {
        return Ok(());
    }

    let catalog = fetch_catalog(config)?;
    for name in [&mut record.champion, &mut record.opponent] {
        if name.trim().is_empty() {
            continue;
        }
        let entry = catalog
            .resolve(name)
            .ok_or_else(|| AppError::UnknownChampion(name.clone()))?;
        *name = entry.id;
    }
    Ok(())
}
