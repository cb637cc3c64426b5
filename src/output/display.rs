//! Display functions for command results

use super::formatters::{percent, rate_bar};
use crate::commands::LearnResult;
use crate::game::GameStatistics;
use crate::tree::GameTree;
use colored::Colorize;

/// Print aggregate statistics for a batch of games
pub fn print_game_statistics(title: &str, stats: &GameStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Guesser wins:     {} {}",
        stats.guesser_wins,
        format!("({})", percent(stats.guesser_win_rate())).green()
    );
    println!(
        "   Adversary wins:   {} {}",
        stats.adversary_wins,
        format!("({})", percent(1.0 - stats.guesser_win_rate())).yellow()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", stats.games_per_second);

    println!("\n📈 {}", "Game length:".bright_cyan().bold());
    let max_length = stats.guess_distribution.keys().max().copied().unwrap_or(0);
    for guesses in 1..=max_length {
        if let Some(&count) = stats.guess_distribution.get(&guesses) {
            let fraction = count as f64 / stats.total_games as f64;
            println!(
                "   {guesses} guesses: {} {count:4} ({})",
                rate_bar(fraction, 40).green(),
                percent(fraction)
            );
        }
    }
}

/// Print the outcome of a learning run
pub fn print_learning_result(result: &LearnResult) {
    print_game_statistics("LEARNING RESULTS", &result.statistics);

    println!("\n🌱 {}", "Learned tree:".bright_cyan().bold());
    println!("   Nodes:            {}", result.tree_size);
    if let Some(probability) = result.root_win_probability {
        println!(
            "   Root win prob:    {}",
            format!("{probability:.3}").bright_yellow().bold()
        );
    }

    if !result.window_win_rates.is_empty() {
        println!("\n📉 {}", "Win rate over time:".bright_cyan().bold());
        for (i, &rate) in result.window_win_rates.iter().enumerate() {
            println!(
                "   window {:2}: {} {}",
                i + 1,
                rate_bar(rate, 30).green(),
                percent(rate)
            );
        }
    }
}

/// Print a short summary of a game tree
pub fn print_tree_overview(tree: &GameTree) {
    println!("\n🌳 {}", "Game tree:".bright_cyan().bold());
    println!("   Nodes:            {}", tree.size());
    println!("   Root children:    {}", tree.get_subtrees().len());
    if let Some(probability) = tree.win_probability() {
        println!("   Root win prob:    {probability:.3}");
    }
}
