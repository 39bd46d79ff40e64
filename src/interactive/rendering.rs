//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CellPos, GRID_SIZE};
use crate::game::{AdSink, CellView, Round, RoundOutcome};
use crate::output::formatters::{category_label, cell_symbol, lives_hearts};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    if app.input_mode == InputMode::Tutorial {
        render_tutorial(f, main_chunks[0]);
    } else {
        render_grid(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let title = format!(
        "💣 WORD BOMB - {}",
        category_label(app.engine.category())
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_tutorial(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("Every row hides one letter of a 6-letter word, in order."),
        Line::from(""),
        Line::from("1. Press Enter on a hidden row to reveal it. Revealing is free."),
        Line::from("2. Move to the letter that belongs to the word and press Enter."),
        Line::from("3. Avoid the 💣. Hitting it ends the round and costs a life."),
        Line::from("4. Fill all six slots to submit your answer."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn cell_style(round: &Round, pos: CellPos, cursor: CellPos) -> Style {
    let style = match round.cell_view(pos) {
        CellView::Hidden => Style::default().fg(Color::DarkGray),
        CellView::Bomb => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        CellView::Letter(_) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };

    let style = if round.incorrect_flash() == Some(pos) {
        style.bg(Color::Red)
    } else if round.outcome() == RoundOutcome::Won && round.grid().is_target(pos) {
        style.fg(Color::Green)
    } else {
        style
    };

    if pos == cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_grid<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let block = Block::default()
        .title(" Grid ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(round) = app.engine.round() else {
        let paragraph = Paragraph::new("No word in play. Press 'c' to change category.")
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from("")];
    for row in 0..GRID_SIZE {
        let mut spans = vec![Span::styled(
            format!("  {}  ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..GRID_SIZE {
            let Some(pos) = CellPos::new(row, col) else {
                continue;
            };
            spans.push(Span::styled(
                format!(" {} ", cell_symbol(round.cell_view(pos))),
                cell_style(round, pos, app.cursor),
            ));
            spans.push(Span::raw(" "));
        }

        let slot = round.buffer().slot(row);
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("[{}]", slot.unwrap_or(' ')),
            Style::default().fg(if slot.is_some() {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_info_panel<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Lives
            Constraint::Length(3), // Category progress
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_category_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_lives<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let lives = app.engine.lives();
    let mut content = vec![Line::from(Span::styled(
        lives_hearts(lives.count(), lives.max()),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))];
    if lives.is_exhausted() {
        content.push(Line::from(Span::styled(
            "Out of lives: 'r' to refill or come back tomorrow",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Lives ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_category_progress<S: KeyValueStore, A: AdSink>(
    f: &mut Frame,
    app: &App<S, A>,
    area: Rect,
) {
    let (completed, total) = app.engine.category_progress(app.engine.category());
    let percent = if total == 0 {
        0
    } else {
        (completed * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Solved ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{completed}/{total}"));

    f.render_widget(gauge, area);
}

fn render_messages<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let (text, color) = match app.input_mode {
        InputMode::Tutorial => ("Press any key to start".to_string(), Color::Cyan),
        InputMode::ConfirmSwitch(category) => (
            format!("Switch to {category}? You will lose this round. (y/n)"),
            Color::Yellow,
        ),
        InputMode::Playing => match app.round_outcome() {
            Some(RoundOutcome::Won) => ("🎉 Solved! 'n' for the next word".to_string(), Color::Green),
            Some(RoundOutcome::Lost) => {
                let word = app
                    .engine
                    .round()
                    .map(|round| round.word().text().to_uppercase())
                    .unwrap_or_default();
                (format!("💥 The word was {word}. 'n' for the next word"), Color::Red)
            }
            _ => (
                "Arrows/hjkl: move | Enter: tap | s: submit | n: next | c: category".to_string(),
                Color::Yellow,
            ),
        },
    };

    let prompt = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(prompt, area);
}

fn render_status<S: KeyValueStore, A: AdSink>(f: &mut Frame, app: &App<S, A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let progress = app.engine.progress();

    let correct = Paragraph::new(format!("Correct: {}", progress.correct()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(correct, chunks[0]);

    let wrong = Paragraph::new(format!("Wrong: {}", progress.wrong()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    f.render_widget(wrong, chunks[1]);

    let rate = Paragraph::new(format!("Win Rate: {}%", progress.win_rate()))
        .alignment(Alignment::Center);
    f.render_widget(rate, chunks[2]);

    let help = Paragraph::new("q: Quit | r: Refill lives")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Grid, GridRow, Word};
    use crate::game::{GameConfig, GuessEngine, NoAds};
    use crate::storage::{MemoryStore, StoreExt, keys};
    use crate::wordlists::WordTable;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn app() -> App<MemoryStore, NoAds> {
        let mut store = MemoryStore::new();
        store.save(keys::TUTORIAL_SEEN, &true).unwrap();
        let table = Arc::new(WordTable::from_named_lists([("household", vec!["garden"])]));
        let engine = GuessEngine::new(GameConfig::default(), table, store, NoAds).with_seed(2);
        let mut app = App::new(engine, Category::Household);

        let word = Word::new("garden").unwrap();
        let rows = [
            GridRow::from_pattern("QZGXK*", 2).unwrap(),
            GridRow::from_pattern("A*BCDA", 0).unwrap(),
            GridRow::from_pattern("*RXYZW", 1).unwrap(),
            GridRow::from_pattern("DD*MNO", 1).unwrap(),
            GridRow::from_pattern("PQRSE*", 4).unwrap(),
            GridRow::from_pattern("N*NNNN", 0).unwrap(),
        ];
        let grid = Grid::from_rows(&word, rows).unwrap();
        app.engine.start_round_with(word, grid);
        app
    }

    fn screen(app: &App<MemoryStore, NoAds>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn hidden_rows_do_not_leak_letters() {
        let app = app();
        let text = screen(&app);
        assert!(text.contains("WORD BOMB"));
        assert!(!text.contains('Z'));
    }

    #[test]
    fn revealed_row_is_drawn() {
        let mut app = app();
        app.tap();
        let text = screen(&app);
        assert!(text.contains('Z'));
    }

    #[test]
    fn lost_round_shows_the_word() {
        let mut app = app();
        app.tap();
        app.move_cursor(0, 5);
        app.tap();
        let text = screen(&app);
        assert!(text.contains("GARDEN"));
    }
}
