//! TUI application state and logic

use crate::core::{Category, CellPos, GRID_SIZE};
use crate::game::{AdSink, GameError, GameEvent, GuessEngine, RoundOutcome};
use crate::storage::{KeyValueStore, StoreExt, keys};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: KeyValueStore, A: AdSink> {
    pub engine: GuessEngine<S, A>,
    pub cursor: CellPos,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// How-to-play screen shown on first launch
    Tutorial,
    Playing,
    /// Waiting for y/n on a category switch
    ConfirmSwitch(Category),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, A: AdSink> App<S, A> {
    /// Wrap an engine and start the first round in `category`
    #[must_use]
    pub fn new(engine: GuessEngine<S, A>, category: Category) -> Self {
        let tutorial_seen = engine.store().load_or(keys::TUTORIAL_SEEN, false, false);

        let mut app = Self {
            engine,
            cursor: CellPos::default(),
            input_mode: if tutorial_seen {
                InputMode::Playing
            } else {
                InputMode::Tutorial
            },
            messages: Vec::new(),
            should_quit: false,
        };

        let result = app.engine.start(category);
        app.apply(result);
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Record an operation's outcome as messages and mode changes
    fn apply(&mut self, result: Result<Vec<GameEvent>, GameError>) {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                let hint = match e {
                    GameError::LivesExhausted => " Press 'r' to refill.",
                    GameError::RoundOver => " Press 'n' for a new word.",
                    GameError::NoWordsRemaining { .. } => " Press 'c' to change category.",
                    _ => "",
                };
                let style = if matches!(e, GameError::NoWordsRemaining { .. }) {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&format!("{e}.{hint}"), style);
                return;
            }
        };

        for event in events {
            let style = match event {
                GameEvent::Won { .. } => MessageStyle::Success,
                GameEvent::Lost { .. } | GameEvent::IncorrectGuess { .. } => MessageStyle::Error,
                GameEvent::ConfirmationRequired { pending } => {
                    self.input_mode = InputMode::ConfirmSwitch(pending);
                    MessageStyle::Info
                }
                GameEvent::RoundStarted { .. } => {
                    self.cursor = CellPos::default();
                    MessageStyle::Info
                }
                _ => MessageStyle::Info,
            };
            self.add_message(&event.to_string(), style);
        }
    }

    /// Move the cursor, staying on the grid
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |value: usize, delta: isize| {
            value.saturating_add_signed(delta).min(GRID_SIZE - 1)
        };
        let row = clamp(self.cursor.row(), d_row);
        let col = clamp(self.cursor.col(), d_col);
        if let Some(pos) = CellPos::new(row, col) {
            self.cursor = pos;
        }
    }

    pub fn tap(&mut self) {
        let result = self.engine.select_cell(self.cursor);
        self.apply(result);
    }

    pub fn submit(&mut self) {
        let result = self.engine.submit();
        self.apply(result);
    }

    /// Move on to a new word once the current one is decided
    pub fn next_word(&mut self) {
        if self.engine.round_in_play() {
            self.add_message(
                "Finish this word first, or press 's' to give up on it",
                MessageStyle::Error,
            );
            return;
        }
        let result = self.engine.next_round();
        self.apply(result);
    }

    /// Ask to move to the next unlocked category
    pub fn cycle_category(&mut self) {
        let current = self.engine.category();
        let mut candidate = current.next();
        while candidate != current && !self.engine.is_unlocked(candidate) {
            candidate = candidate.next();
        }

        if candidate == current {
            self.add_message("Unlock premium for more categories", MessageStyle::Info);
            return;
        }

        let result = self.engine.switch_category(candidate);
        self.apply(result);
    }

    /// Full lives from a rewarded ad, offered only when none are left
    pub fn refill(&mut self) {
        if !self.engine.lives().is_exhausted() {
            self.add_message("You still have lives left", MessageStyle::Info);
            return;
        }
        let events = self.engine.grant_lives();
        self.apply(Ok(events));
    }

    fn finish_tutorial(&mut self) {
        self.engine
            .store_mut()
            .save_logged(keys::TUTORIAL_SEEN, &true);
        self.input_mode = InputMode::Playing;
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The wrong-pick flag lasts until the next key.
        self.engine.clear_incorrect_flash();

        match self.input_mode {
            InputMode::Tutorial => self.finish_tutorial(),
            InputMode::ConfirmSwitch(category) => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.input_mode = InputMode::Playing;
                    let result = self.engine.confirm_category_switch();
                    self.apply(result);
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.input_mode = InputMode::Playing;
                    self.engine.cancel_category_switch();
                    self.add_message(&format!("Staying out of {category}"), MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => self.tap(),
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('n') => self.next_word(),
                KeyCode::Char('c') => self.cycle_category(),
                KeyCode::Char('r') => self.refill(),
                _ => {}
            },
        }
    }

    /// Whether the current round has been decided
    #[must_use]
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        self.engine.round().map(crate::game::Round::outcome)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, A: AdSink>(app: App<S, A>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, A: AdSink>(
    terminal: &mut Terminal<B>,
    mut app: App<S, A>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, NoAds};
    use crate::storage::MemoryStore;
    use crate::wordlists::WordTable;
    use std::sync::Arc;

    type TestApp = App<MemoryStore, NoAds>;

    fn app_with_store(store: MemoryStore) -> TestApp {
        let table = Arc::new(WordTable::from_named_lists([
            ("food", vec!["banana", "cherry"]),
            ("household", vec!["garden"]),
        ]));
        let engine = GuessEngine::new(GameConfig::default(), table, store, NoAds).with_seed(11);
        App::new(engine, Category::Food)
    }

    fn app() -> TestApp {
        let mut store = MemoryStore::new();
        store.save(keys::TUTORIAL_SEEN, &true).unwrap();
        app_with_store(store)
    }

    fn press(app: &mut TestApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn first_launch_shows_tutorial_once() {
        let mut app = app_with_store(MemoryStore::new());
        assert_eq!(app.input_mode, InputMode::Tutorial);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(
            app.engine.store().load::<bool>(keys::TUTORIAL_SEEN).unwrap(),
            Some(true)
        );
    }

    #[test]
    fn cursor_stays_on_grid() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, CellPos::default());

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char('l'));
        }
        assert_eq!(app.cursor, CellPos::new(5, 5).unwrap());
    }

    #[test]
    fn enter_reveals_the_cursor_row() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let round = app.engine.round().unwrap();
        assert!(round.revealed().is_revealed(1));
        assert_eq!(round.revealed().len(), 1);
        assert_eq!(app.messages.last().unwrap().text, "Row 2 revealed");
    }

    #[test]
    fn category_switch_asks_first() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::ConfirmSwitch(Category::Household));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.engine.category(), Category::Food);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.engine.category(), Category::Household);
        assert_eq!(app.engine.round().unwrap().word().text(), "garden");
    }

    #[test]
    fn hitting_a_bomb_loses_a_life() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        let bomb = app.engine.round().unwrap().grid().row(0).bomb_col();
        for _ in 0..bomb {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.round_outcome(), Some(RoundOutcome::Lost));
        assert_eq!(app.engine.lives().count(), 3);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine.lives().count(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.round_outcome(), Some(RoundOutcome::InProgress));
        assert_eq!(app.cursor, CellPos::default());
    }

    #[test]
    fn next_word_waits_for_the_round_to_end() {
        let mut app = app();
        for _ in 0..GRID_SIZE {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Down);
        }
        let word = app.engine.round().unwrap().word().clone();

        press(&mut app, KeyCode::Char('n'));
        let round = app.engine.round().unwrap();
        assert_eq!(round.word(), &word);
        assert_eq!(round.revealed().len(), GRID_SIZE);
        assert_eq!(app.engine.lives().count(), 4);
        assert_eq!(app.engine.progress().wrong(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn refill_restores_lives_only_when_out() {
        let mut app = app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('s'));
            press(&mut app, KeyCode::Char('n'));
        }
        press(&mut app, KeyCode::Char('s'));
        assert!(app.engine.lives().is_exhausted());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine.lives().count(), 4);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with_store(MemoryStore::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
