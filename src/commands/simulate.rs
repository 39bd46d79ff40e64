//! Simulate command
//!
//! Plays many independent rounds with a scripted player to check how the
//! game balances out. Rounds run in parallel; each one gets a fresh
//! in-memory store and its own seed, so results are reproducible.

use crate::core::{Category, CellPos, GRID_SIZE};
use crate::game::{
    CellView, GameConfig, GameError, GameEvent, GuessEngine, LossCause, NoAds, Round,
    RoundOutcome,
};
use crate::storage::MemoryStore;
use crate::wordlists::WordTable;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How the scripted player picks cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Policy {
    /// Any untried cell in the row, bombs included
    Random,
    /// Any untried cell that is not a visible bomb
    Careful,
    /// Always the designated cell
    Oracle,
}

impl Policy {
    /// Column to tap next in a revealed row, `None` if nothing is left to try
    fn choose(self, round: &Round, row: usize, tried: &[bool; GRID_SIZE], rng: &mut StdRng) -> Option<usize> {
        if self == Self::Oracle {
            return Some(round.grid().row(row).target_col());
        }

        let candidates: Vec<usize> = (0..GRID_SIZE)
            .filter(|&col| !tried[col])
            .filter(|&col| {
                self == Self::Random
                    || CellPos::new(row, col)
                        .is_some_and(|pos| round.cell_view(pos) != CellView::Bomb)
            })
            .collect();
        candidates.choose(rng).copied()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Random => "random",
            Self::Careful => "careful",
            Self::Oracle => "oracle",
        };
        f.write_str(name)
    }
}

/// What happened in one simulated round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundRecord {
    pub won: bool,
    pub taps: usize,
    pub wrong_picks: usize,
    /// Row of the bomb that ended the round, if one did
    pub bomb_row: Option<usize>,
}

/// Aggregate of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub policy: Policy,
    pub category: Category,
    pub rounds: usize,
    pub won: usize,
    pub lost_to_bomb: usize,
    pub lost_wrong_word: usize,
    pub average_taps: f64,
    pub average_wrong_picks: f64,
    /// Bomb losses by the row they happened in
    pub bombs_by_row: [usize; GRID_SIZE],
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.won as f64 / self.rounds as f64 * 100.0
    }
}

/// Play one round to completion with the given policy
///
/// # Errors
/// Returns `GameError::NoWordsRemaining` if the category has no words.
pub fn play_round(
    table: Arc<WordTable>,
    config: &GameConfig,
    category: Category,
    policy: Policy,
    seed: u64,
) -> Result<RoundRecord, GameError> {
    let mut engine =
        GuessEngine::new(config.clone(), table, MemoryStore::new(), NoAds).with_seed(seed);
    let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));
    engine.start(category)?;

    let mut record = RoundRecord::default();

    'rows: for row in 0..GRID_SIZE {
        let mut tried = [false; GRID_SIZE];

        loop {
            let Some(round) = engine.round() else {
                break 'rows;
            };
            if round.is_over() {
                break 'rows;
            }
            if round.buffer().slot(row).is_some() {
                break;
            }

            let col = if round.revealed().is_revealed(row) {
                match policy.choose(round, row, &tried, &mut rng) {
                    Some(col) => col,
                    None => break 'rows,
                }
            } else {
                0
            };
            let Some(pos) = CellPos::new(row, col) else {
                break 'rows;
            };
            let was_revealed = round.revealed().is_revealed(row);

            let events = engine.select_cell(pos)?;
            record.taps += 1;
            if was_revealed {
                tried[col] = true;
            }

            for event in events {
                match event {
                    GameEvent::IncorrectGuess { .. } => record.wrong_picks += 1,
                    GameEvent::Lost {
                        cause: LossCause::Bomb(at),
                        ..
                    } => record.bomb_row = Some(at.row()),
                    _ => {}
                }
            }
            engine.clear_incorrect_flash();
        }
    }

    // Out of options without a full answer: hand in what there is.
    if engine.round().is_some_and(|round| !round.is_over()) {
        engine.submit()?;
    }
    record.won = engine
        .round()
        .is_some_and(|round| round.outcome() == RoundOutcome::Won);

    Ok(record)
}

/// Run `count` rounds in parallel and aggregate the outcomes
///
/// Round `i` is seeded with `seed + i`.
///
/// # Errors
/// Returns the first `GameError` a round produced.
///
/// # Panics
/// Panics if the progress bar template is invalid.
pub fn run_simulation(
    table: &Arc<WordTable>,
    config: &GameConfig,
    category: Category,
    policy: Policy,
    count: usize,
    seed: u64,
) -> Result<SimulationResult, GameError> {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{policy} player, {category}"));

    let start = Instant::now();
    let records: Vec<RoundRecord> = (0..count)
        .into_par_iter()
        .map(|i| {
            let record = play_round(
                Arc::clone(table),
                config,
                category,
                policy,
                seed.wrapping_add(i as u64),
            );
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    Ok(summarize(policy, category, &records, duration))
}

fn summarize(
    policy: Policy,
    category: Category,
    records: &[RoundRecord],
    duration: Duration,
) -> SimulationResult {
    let rounds = records.len();
    let won = records.iter().filter(|r| r.won).count();
    let lost_to_bomb = records.iter().filter(|r| r.bomb_row.is_some()).count();

    let mut bombs_by_row = [0; GRID_SIZE];
    for row in records.iter().filter_map(|r| r.bomb_row) {
        bombs_by_row[row] += 1;
    }

    let per_round = |total: usize| {
        if rounds == 0 {
            0.0
        } else {
            total as f64 / rounds as f64
        }
    };

    SimulationResult {
        policy,
        category,
        rounds,
        won,
        lost_to_bomb,
        lost_wrong_word: rounds - won - lost_to_bomb,
        average_taps: per_round(records.iter().map(|r| r.taps).sum()),
        average_wrong_picks: per_round(records.iter().map(|r| r.wrong_picks).sum()),
        bombs_by_row,
        duration,
        rounds_per_second: if duration.is_zero() {
            0.0
        } else {
            rounds as f64 / duration.as_secs_f64()
        },
    }
}
