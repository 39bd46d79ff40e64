//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one command per line.

use crate::core::{Category, CellPos};
use crate::game::{AdSink, GameError, GameEvent, GuessEngine};
use crate::output::{print_events, print_round, print_stats};
use crate::storage::{KeyValueStore, StoreExt, keys};
use std::io::{self, Write};

use super::stats::collect_stats;

const TUTORIAL: &str = "\
How to play:
  - Every row hides one letter of a 6-letter word, in order.
  - Tap a hidden row to reveal it. Revealing is free.
  - In a revealed row, tap the letter that belongs to the word.
  - Tapping the bomb ends the round and costs a life.
  - Fill all six slots to submit your answer.";

const HELP: &str = "\
Commands:
  <row> <col>        tap a cell (1-6 each), e.g. '3 5'
  submit             hand in the letters placed so far
  next               new word once this one is decided
  category <name>    switch category (food, sports, household, animals, places)
  yes / no           answer a pending question
  refill             watch an ad for full lives when none are left
  stats              show your progress
  help               show this text
  quit               leave the game";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tap(CellPos),
    Submit,
    Next,
    Category(Category),
    Yes,
    No,
    Refill,
    Stats,
    Help,
    Quit,
}

/// Parse one line of input
///
/// # Errors
/// Returns a message for the player if the line is not a command.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_lowercase();
    let mut parts = input.split_whitespace();
    let Some(first) = parts.next() else {
        return Err("Type a command, or 'help'".to_string());
    };

    let command = match first {
        "quit" | "q" | "exit" => Command::Quit,
        "submit" | "s" => Command::Submit,
        "next" | "n" | "new" => Command::Next,
        "yes" | "y" => Command::Yes,
        "no" => Command::No,
        "refill" | "ad" => Command::Refill,
        "stats" => Command::Stats,
        "help" | "h" | "?" => Command::Help,
        "category" | "c" => {
            let name = parts.next().ok_or("Which category?")?;
            Command::Category(name.parse::<Category>().map_err(|e| e.to_string())?)
        }
        row => {
            let col = parts.next().ok_or("Enter a row and a column, e.g. '3 5'")?;
            let row: usize = row.parse().map_err(|_| format!("Unknown command '{input}'"))?;
            let col: usize = col.parse().map_err(|_| format!("'{col}' is not a column"))?;
            let pos = row
                .checked_sub(1)
                .zip(col.checked_sub(1))
                .and_then(|(r, c)| CellPos::new(r, c))
                .ok_or("Rows and columns go from 1 to 6")?;
            Command::Tap(pos)
        }
    };

    if parts.next().is_some() {
        return Err(format!("Too many words in '{input}'"));
    }
    Ok(command)
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Apply a command to the engine, printing its results
pub fn apply_command<S: KeyValueStore, A: AdSink>(
    engine: &mut GuessEngine<S, A>,
    command: Command,
) -> Flow {
    // The wrong-pick mark was shown with the last redraw
    engine.clear_incorrect_flash();

    let result = match command {
        Command::Quit => return Flow::Quit,
        Command::Help => {
            println!("{HELP}");
            return Flow::Continue;
        }
        Command::Stats => {
            print_stats(&collect_stats(engine));
            return Flow::Continue;
        }
        Command::Tap(pos) => engine.select_cell(pos),
        Command::Submit => engine.submit(),
        Command::Next if engine.round_in_play() => {
            println!("Finish this word first, or 'submit' to give up on it");
            return Flow::Continue;
        }
        Command::Next => engine.next_round(),
        Command::Refill if !engine.lives().is_exhausted() => {
            println!("You still have lives left");
            return Flow::Continue;
        }
        Command::Refill => Ok(engine.grant_lives()),
        Command::Category(category) if !engine.is_unlocked(category) => {
            println!("🔒 {category} is a premium category");
            return Flow::Continue;
        }
        Command::Category(category) => engine.switch_category(category),
        Command::Yes => engine.confirm_category_switch(),
        Command::No => {
            if engine.cancel_category_switch() {
                println!("Staying in {}", engine.category());
            } else {
                println!("Nothing to answer");
            }
            return Flow::Continue;
        }
    };

    match result {
        Ok(events) => {
            print_events(&events);
            if events
                .iter()
                .any(|e| matches!(e, GameEvent::ConfirmationRequired { .. }))
            {
                println!("Type 'yes' to switch or 'no' to keep playing");
                return Flow::Continue;
            }
            Flow::Redraw
        }
        Err(e) => {
            print_error(&e);
            Flow::Continue
        }
    }
}

fn print_error(error: &GameError) {
    match error {
        GameError::LivesExhausted => {
            println!("💔 {error}. Type 'refill' to watch an ad, or come back tomorrow.");
        }
        GameError::RoundOver => println!("{error}. Type 'next' for a new word."),
        GameError::NoWordsRemaining { .. } => {
            println!("🏆 {error}. Try 'category <name>'.");
        }
        _ => println!("{error}"),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore, A: AdSink>(
    engine: &mut GuessEngine<S, A>,
    category: Category,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Bomb - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if !engine.store().load_or(keys::TUTORIAL_SEEN, false, false) {
        println!("{TUTORIAL}\n");
        engine.store_mut().save_logged(keys::TUTORIAL_SEEN, &true);
    }
    println!("{HELP}\n");

    match engine.start(category) {
        Ok(events) => print_events(&events),
        Err(e) => print_error(&e),
    }
    redraw(engine);

    loop {
        let input = get_user_input("Command")?;
        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(message) => {
                println!("❌ {message}");
                continue;
            }
        };

        match apply_command(engine, command) {
            Flow::Quit => break,
            Flow::Redraw => redraw(engine),
            Flow::Continue => {}
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn redraw<S: KeyValueStore, A: AdSink>(engine: &GuessEngine<S, A>) {
    if let Some(round) = engine.round() {
        print_round(round, engine.lives().count(), engine.lives().max());
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
