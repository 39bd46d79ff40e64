//! Display functions for game state and command results

use super::formatters::{
    answer_slots, category_label, cell_symbol, column_header, create_progress_bar, lives_hearts,
};
use crate::commands::{SimulationResult, StatsReport};
use crate::core::CellPos;
use crate::game::{CellView, GameEvent, Round};
use colored::Colorize;

/// Print the grid as the player may see it, with answer slots and lives
pub fn print_round(round: &Round, lives: u8, max_lives: u8) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {}   Lives: {}",
        category_label(round.category()).bright_yellow().bold(),
        lives_hearts(lives, max_lives).red()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n      {}", column_header().bright_black());
    for (row, cells) in round.view().iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| {
                let symbol = cell_symbol(cell).to_string();
                let flagged = CellPos::new(row, col)
                    .is_some_and(|pos| round.incorrect_flash() == Some(pos));
                match cell {
                    _ if flagged => symbol.on_red().to_string(),
                    CellView::Hidden => symbol.bright_black().to_string(),
                    CellView::Bomb => symbol,
                    CellView::Letter(_) => symbol.bright_white().bold().to_string(),
                }
            })
            .collect();
        let slot = round.buffer().slot(row).map_or_else(
            || "_".bright_black().to_string(),
            |c| c.to_string().green().bold().to_string(),
        );
        println!("   {}  {}   {}", row + 1, line.join(" "), slot);
    }

    println!(
        "\n   Answer: {}",
        answer_slots(round.buffer()).bright_cyan().bold()
    );
}

/// Print event messages, colored by kind
pub fn print_events(events: &[GameEvent]) {
    for event in events {
        let text = event.to_string();
        match event {
            GameEvent::Won { .. } => println!("🎉 {}", text.green().bold()),
            GameEvent::Lost { .. } => println!("💥 {}", text.red().bold()),
            GameEvent::IncorrectGuess { .. } => println!("❌ {}", text.yellow()),
            GameEvent::ConfirmationRequired { .. } => println!("⚠ {}", text.bright_yellow()),
            GameEvent::LivesRefilled { .. } => println!("♥ {}", text.red()),
            _ => println!("{}", text.bright_white()),
        }
    }
}

/// Print the stats report
pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD BOMB STATS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Answers:".bright_cyan().bold());
    println!("   Correct:   {}", report.correct.to_string().green().bold());
    println!("   Wrong:     {}", report.wrong.to_string().red());
    println!(
        "   Win rate:  {}",
        format!("{}%", report.win_rate).bright_yellow().bold()
    );
    println!(
        "   Lives:     {} ({}/{})",
        lives_hearts(report.lives, report.max_lives).red(),
        report.lives,
        report.max_lives
    );
    if report.premium {
        println!("   Premium:   {}", "unlocked".green());
    }

    println!("\n📈 {}", "Categories:".bright_cyan().bold());
    for stats in &report.categories {
        let bar = create_progress_bar(stats.completed as f64, stats.total as f64, 30);
        let lock = if stats.unlocked {
            String::new()
        } else {
            " 🔒".to_string()
        };
        println!(
            "   {:<14} {} {:>3}/{:<3}{}",
            category_label(stats.category),
            bar.green(),
            stats.completed,
            stats.total,
            lock
        );
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Policy:           {}", result.policy);
    println!("   Category:         {}", category_label(result.category));
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Won:              {} ({})",
        result.won.to_string().green().bold(),
        format!("{:.1}%", result.win_percentage()).bright_yellow()
    );
    println!("   Lost to bomb:     {}", result.lost_to_bomb.to_string().red());
    println!("   Lost, wrong word: {}", result.lost_wrong_word.to_string().yellow());
    println!("   Average taps:     {:.2}", result.average_taps);
    println!("   Wrong picks:      {:.2} per round", result.average_wrong_picks);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.lost_to_bomb > 0 {
        println!("\n💣 {}", "Bombs by row:".bright_cyan().bold());
        for (row, &count) in result.bombs_by_row.iter().enumerate() {
            let pct = count as f64 / result.lost_to_bomb as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).red(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {}: {bar} {count:5} ({pct:5.1}%)", row + 1);
        }
    }
    println!();
}
