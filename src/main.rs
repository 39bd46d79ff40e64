//! Word Bomb - CLI
//!
//! Word-guessing game with TUI and plain-text modes, plus tools for
//! inspecting saved progress and simulating rounds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use word_bomb::{
    commands::{Policy, collect_stats, run_simple, run_simulation},
    core::Category,
    game::{GameConfig, GuessEngine, LoggingAds},
    output::{print_simulation_result, print_stats},
    storage::{FileStore, KeyValueStore, MemoryStore},
    wordlists::WordTable,
};

#[derive(Parser)]
#[command(
    name = "word_bomb",
    about = "Reveal the grid, dodge the bombs, spell the hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category to play: food, sports, household, animals, places
    #[arg(short, long, global = true, default_value = "food")]
    category: Category,

    /// Game settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved progress and logs (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word table (JSON object of category → words) instead of the built-in lists
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for reproducible words and grids
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one command per line, no TUI)
    Simple,

    /// Show saved progress
    Stats,

    /// Play many rounds with a scripted player
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// How the scripted player picks cells
        #[arg(short, long, value_enum, default_value = "careful")]
        policy: Policy,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = setup_logging(matches!(command, Commands::Play), &data_dir)?;

    let config = load_config(cli.config.as_deref())?;
    let table = Arc::new(load_words(cli.words.as_deref())?);

    match command {
        Commands::Simulate { count, policy } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Simulating {count} {} rounds ({policy} player, seed {seed})...", cli.category);
            let result = run_simulation(&table, &config, cli.category, policy, count, seed)?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let engine = GuessEngine::new(config, table, open_store(&data_dir), LoggingAds);
            print_stats(&collect_stats(&engine));
            Ok(())
        }
        Commands::Simple => {
            let mut engine = build_engine(config, table, &data_dir, cli.seed);
            ensure_unlocked(&engine, cli.category)?;
            run_simple(&mut engine, cli.category).context("input error")
        }
        Commands::Play => {
            use word_bomb::interactive::{App, run_tui};

            let engine = build_engine(config, table, &data_dir, cli.seed);
            ensure_unlocked(&engine, cli.category)?;
            run_tui(App::new(engine, cli.category))
        }
    }
}

/// Platform data directory, e.g. `~/.local/share/word_bomb` on Linux
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "word_bomb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in that mode logs go to a file under the
/// data directory; everything else logs to stderr. `RUST_LOG` overrides the
/// default `warn` level.
fn setup_logging(to_file: bool, data_dir: &Path) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "word_bomb.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("Logging to {}", log_dir.display());
    Ok(Some(guard))
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    GameConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Built-in word lists, or a JSON table from `--words`
fn load_words(path: Option<&Path>) -> Result<WordTable> {
    let Some(path) = path else {
        return Ok(WordTable::embedded());
    };
    WordTable::load_from_file(path)
        .with_context(|| format!("Failed to load word table {}", path.display()))
}

/// Saved progress, or a throwaway store if the file cannot be used
fn open_store(data_dir: &Path) -> Box<dyn KeyValueStore> {
    let path = data_dir.join("progress.json");
    match FileStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Cannot open {}: {e}", path.display());
            eprintln!("Warning: progress will not be saved ({e})");
            Box::new(MemoryStore::new())
        }
    }
}

fn build_engine(
    config: GameConfig,
    table: Arc<WordTable>,
    data_dir: &Path,
    seed: Option<u64>,
) -> GuessEngine<Box<dyn KeyValueStore>, LoggingAds> {
    let engine = GuessEngine::new(config, table, open_store(data_dir), LoggingAds);
    match seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    }
}

fn ensure_unlocked(
    engine: &GuessEngine<Box<dyn KeyValueStore>, LoggingAds>,
    category: Category,
) -> Result<()> {
    if engine.is_unlocked(category) {
        return Ok(());
    }
    let free: Vec<String> = engine
        .config()
        .free_categories
        .iter()
        .map(ToString::to_string)
        .collect();
    anyhow::bail!(
        "{category} is a premium category; free categories: {}",
        free.join(", ")
    )
}
