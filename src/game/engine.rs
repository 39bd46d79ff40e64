//! The guess engine: rules for one player session
//!
//! Per row: `Hidden → Revealed → (Filled | BombHit)`.
//! Per round: `InProgress → Won | Lost`.
//!
//! Every operation runs to completion, persists what it changed and returns
//! the events it produced. The engine owns its collaborators (store, ad sink,
//! clock, RNG) so it can run without any UI or ad backend.

use super::ads::{AdRequest, AdSink, NoAds};
use super::clock::{Clock, SystemClock};
use super::config::GameConfig;
use super::error::GameError;
use super::events::{GameEvent, LossCause};
use super::lives::LivesTracker;
use super::progress::ProgressStore;
use super::round::Round;
use super::word_bank::WordBank;
use crate::core::{Category, Cell, CellPos, Grid, Word};
use crate::storage::{KeyValueStore, StoreExt, keys};
use crate::wordlists::WordTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

/// Events produced by one operation, in order
pub type Events = Vec<GameEvent>;

/// Game state machine for a single player
pub struct GuessEngine<S: KeyValueStore, A: AdSink = NoAds> {
    config: GameConfig,
    store: S,
    ads: A,
    clock: Box<dyn Clock>,
    rng: StdRng,
    word_bank: WordBank,
    lives: LivesTracker,
    progress: ProgressStore,
    category: Category,
    round: Option<Round>,
    pending_category: Option<Category>,
}

impl<S: KeyValueStore, A: AdSink> GuessEngine<S, A> {
    /// Create an engine, loading the player's progress from `store`
    ///
    /// No round is started; call [`GuessEngine::start`] with a category.
    pub fn new(config: GameConfig, table: Arc<WordTable>, store: S, ads: A) -> Self {
        let word_bank = WordBank::load(table, &store);
        let lives = LivesTracker::load(config.max_lives, &store);
        let progress = ProgressStore::load(&store);
        let category = config.free_categories.first().copied().unwrap_or(Category::Food);

        Self {
            config,
            store,
            ads,
            clock: Box::new(SystemClock),
            rng: StdRng::from_os_rng(),
            word_bank,
            lives,
            progress,
            category,
            round: None,
            pending_category: None,
        }
    }

    /// Use a different calendar for the daily refill
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Make word picks and grids reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start playing a category, discarding any current round without asking
    ///
    /// # Errors
    /// Returns `GameError::NoWordsRemaining` if the category is exhausted.
    pub fn start(&mut self, category: Category) -> Result<Events, GameError> {
        self.category = category;
        self.next_round()
    }

    /// Replace the current round with a fresh word from the current category
    ///
    /// If the player has no lives left, today's refill is tried first.
    ///
    /// # Errors
    /// Returns `GameError::NoWordsRemaining` if every word in the category is
    /// completed; the old round is discarded either way.
    pub fn next_round(&mut self) -> Result<Events, GameError> {
        self.round = None;
        self.pending_category = None;

        let word = match self.word_bank.pick_word(self.category, &mut self.rng) {
            Ok(word) => word,
            Err(e) => {
                tracing::info!("No words left in {}", self.category);
                return Err(e);
            }
        };
        let grid = Grid::generate(&word, &mut self.rng);

        Ok(self.begin_round(word, grid))
    }

    /// Start a round on a prepared word and grid (tutorials, fixtures)
    pub fn start_round_with(&mut self, word: Word, grid: Grid) -> Events {
        self.pending_category = None;
        self.begin_round(word, grid)
    }

    fn begin_round(&mut self, word: Word, grid: Grid) -> Events {
        let mut events = Vec::new();

        if self.lives.is_exhausted() {
            let today = self.clock.today();
            if self.lives.try_daily_refill(today, &mut self.store) {
                events.push(GameEvent::LivesRefilled {
                    lives: self.lives.count(),
                });
            }
        }

        tracing::info!(category = %self.category, "Round started");
        self.round = Some(Round::new(self.category, word, grid));
        events.push(GameEvent::RoundStarted {
            category: self.category,
        });
        events
    }

    /// Handle a tap on a cell
    ///
    /// - full answer slots: evaluate the answer, whatever was tapped
    /// - hidden row: reveal it
    /// - revealed row: bomb loses, the row's letter fills its slot, anything
    ///   else flags a wrong pick
    ///
    /// # Errors
    /// - `GameError::NoActiveRound` before a round starts
    /// - `GameError::RoundOver` once the round is decided
    /// - `GameError::LivesExhausted` when the player has no lives; nothing changes
    pub fn select_cell(&mut self, pos: CellPos) -> Result<Events, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoActiveRound)?;

        if round.buffer().is_full() {
            return self.submit();
        }
        if round.is_over() {
            return Err(GameError::RoundOver);
        }
        if self.lives.is_exhausted() {
            tracing::debug!("Tap at {pos} rejected: no lives");
            return Err(GameError::LivesExhausted);
        }

        if round.revealed().is_revealed(pos.row()) {
            Ok(self.evaluate(pos))
        } else {
            Ok(self.reveal(pos.row()))
        }
    }

    fn reveal(&mut self, row: usize) -> Events {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let reveal_number = round.revealed().len();
        let every = self.config.interstitial_every;
        if every > 0 && reveal_number % every == 0 {
            self.ads.request(AdRequest::Interstitial);
        }

        round.reveal(row);
        tracing::debug!(row, reveal_number, "Row revealed");
        vec![GameEvent::RowRevealed { row }]
    }

    fn evaluate(&mut self, pos: CellPos) -> Events {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let cell = round.grid().cell(pos);
        if cell.is_bomb() {
            tracing::debug!("Bomb hit at {pos}");
            return self.lose(LossCause::Bomb(pos));
        }

        if round.buffer().slot(pos.row()).is_some() {
            tracing::debug!("Row {} already filled, ignoring tap at {pos}", pos.row());
            return Vec::new();
        }

        if !round.grid().is_target(pos) {
            round.flag_incorrect(pos);
            return vec![GameEvent::IncorrectGuess { pos }];
        }

        let Cell::Letter(letter) = cell else {
            return Vec::new();
        };
        round.fill(pos.row(), letter);
        let mut events = vec![GameEvent::LetterPlaced {
            row: pos.row(),
            letter,
        }];

        if round.buffer().is_full() {
            events.extend(self.resolve());
        }
        events
    }

    /// Evaluate the assembled answer
    ///
    /// A match (ignoring case) wins the round; anything else, including a
    /// partly filled answer, loses it.
    ///
    /// # Errors
    /// `GameError::NoActiveRound` before a round starts, `GameError::RoundOver`
    /// if the round is already decided.
    pub fn submit(&mut self) -> Result<Events, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoActiveRound)?;
        if round.is_over() {
            return Err(GameError::RoundOver);
        }
        Ok(self.resolve())
    }

    fn resolve(&mut self) -> Events {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let guess = round.buffer().assembled();
        if !round.word().matches(&guess) {
            return self.lose(LossCause::WrongWord(guess));
        }

        round.win();
        let word = round.word().clone();
        let category = round.category();

        self.word_bank
            .mark_completed(&word, category, &mut self.store);
        self.progress.record_win(&mut self.store);

        tracing::info!(%word, %category, "Round won");
        vec![GameEvent::Won {
            word: word.text().to_string(),
        }]
    }

    fn lose(&mut self, cause: LossCause) -> Events {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        round.lose();
        let word = round.word().text().to_string();

        self.progress.record_loss(&mut self.store);
        let lives = self.lives.consume_life(&mut self.store);
        self.ads.request(AdRequest::PreloadRewarded);

        tracing::info!(%word, ?cause, lives, "Round lost");
        vec![GameEvent::Lost { word, cause }]
    }

    /// Ask to move to another category
    ///
    /// With rows revealed in a round still in progress, nothing changes yet:
    /// the switch waits for [`GuessEngine::confirm_category_switch`].
    ///
    /// # Errors
    /// Returns `GameError::NoWordsRemaining` if the switch applies right away
    /// and the new category is exhausted.
    pub fn switch_category(&mut self, category: Category) -> Result<Events, GameError> {
        if self.round_in_play() {
            self.pending_category = Some(category);
            return Ok(vec![GameEvent::ConfirmationRequired { pending: category }]);
        }

        self.apply_category(category)
    }

    /// Whether the current round has revealed rows and is still undecided
    ///
    /// Such a round is only thrown away after the player confirms a category
    /// switch; front ends refuse to skip it otherwise.
    #[must_use]
    pub fn round_in_play(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| !round.is_over() && !round.revealed().is_empty())
    }

    /// Apply the category switch that was waiting for confirmation
    ///
    /// # Errors
    /// `GameError::NoPendingSwitch` if nothing is waiting, or
    /// `GameError::NoWordsRemaining` if the new category is exhausted.
    pub fn confirm_category_switch(&mut self) -> Result<Events, GameError> {
        let category = self
            .pending_category
            .take()
            .ok_or(GameError::NoPendingSwitch)?;
        self.apply_category(category)
    }

    /// Drop a pending category switch; returns whether one was pending
    pub fn cancel_category_switch(&mut self) -> bool {
        self.pending_category.take().is_some()
    }

    fn apply_category(&mut self, category: Category) -> Result<Events, GameError> {
        self.category = category;
        let mut events = vec![GameEvent::CategoryChanged { category }];
        events.extend(self.next_round()?);
        Ok(events)
    }

    /// Restore full lives, e.g. after a rewarded ad was watched
    pub fn grant_lives(&mut self) -> Events {
        self.lives.grant_full(&mut self.store);
        tracing::info!(lives = self.lives.count(), "Lives granted");
        vec![GameEvent::LivesRefilled {
            lives: self.lives.count(),
        }]
    }

    /// Clear the wrong-pick flag once the caller has shown it
    pub fn clear_incorrect_flash(&mut self) -> bool {
        self.round
            .as_mut()
            .is_some_and(Round::clear_incorrect_flash)
    }

    /// Whether the player may pick this category
    #[must_use]
    pub fn is_unlocked(&self, category: Category) -> bool {
        self.config.unlock_all || self.config.is_free(category) || self.is_premium()
    }

    /// Stored premium entitlement
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.store.load_or(keys::PREMIUM_UNLOCKED, false, false)
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn pending_category(&self) -> Option<Category> {
        self.pending_category
    }

    #[must_use]
    pub const fn lives(&self) -> &LivesTracker {
        &self.lives
    }

    #[must_use]
    pub const fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    #[must_use]
    pub const fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    /// `(completed, total)` words for a category
    #[must_use]
    pub fn category_progress(&self, category: Category) -> (usize, usize) {
        ProgressStore::category_progress(&self.word_bank, category)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access for front-end flags kept next to game progress
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub const fn ads(&self) -> &A {
        &self.ads
    }
}
