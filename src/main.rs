//! Adversarial Wordle - CLI
//!
//! Game-tree experiments for Adversarial Wordle: random baselines, replay
//! of logged games, complete-tree play, and the learning loop.

use adversarial_wordle::{
    commands::{exploration_schedule, run_complete, run_learn, run_random, run_replay},
    core::Word,
    output::{print_game_statistics, print_learning_result, print_tree_overview},
    wordlists::{WORDS_25, WORDS_100, loader},
};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "adversarial_wordle",
    about = "Adversarial Wordle game trees: replay, exhaustive generation, and learned win probabilities",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'small' (25 words), 'default' (100 words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Maximum number of guesses per game
    #[arg(short = 'g', long, global = true, default_value = "3")]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play random-vs-random baseline games
    Random {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        num_games: usize,
    },

    /// Replay a game log as tree guidance for new games
    Replay {
        /// Game log file (one comma-separated game per line)
        games_file: String,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        num_games: usize,

        /// Guide the Adversary with the same tree instead of playing it randomly
        #[arg(long)]
        tree_adversary: bool,
    },

    /// Generate a complete game tree and play greedily from it
    Complete {
        /// Tree depth in plies (2 x max-guesses covers whole games)
        #[arg(short, long, default_value = "6")]
        depth: usize,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        num_games: usize,

        /// Greedy tree Adversary vs random Guesser (default is the reverse)
        #[arg(long)]
        greedy_adversary: bool,
    },

    /// Grow a game tree by playing exploring games
    Learn {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        num_games: usize,

        /// Exploration probability
        #[arg(short = 'p', long, default_value = "0.5")]
        exploration: f64,

        /// Decay exploration linearly to zero across the run
        #[arg(long)]
        decay: bool,

        /// Print the learned tree (large!)
        #[arg(long)]
        print_tree: bool,
    },
}

/// Resolve the word set from the -w flag
fn load_word_set(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "small" => loader::words_from_slice(WORDS_25),
        "default" => loader::words_from_slice(WORDS_100),
        path => loader::load_from_file(path)?,
    };

    if words.is_empty() {
        bail!("word set '{wordlist_mode}' contains no valid words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let word_set = load_word_set(&cli.wordlist)?;
    let max_guesses = cli.max_guesses;

    match cli.command {
        Commands::Random { num_games } => {
            println!("Playing {num_games} random-vs-random games...");
            let stats = run_random(num_games, &word_set, max_guesses);
            print_game_statistics("RANDOM BASELINE", &stats);
        }
        Commands::Replay {
            games_file,
            num_games,
            tree_adversary,
        } => {
            println!("Replaying {games_file} as guidance for {num_games} games...");
            let stats = run_replay(
                &games_file,
                &word_set,
                max_guesses,
                num_games,
                tree_adversary,
            )?;
            print_game_statistics("TREE REPLAY", &stats);
        }
        Commands::Complete {
            depth,
            num_games,
            greedy_adversary,
        } => {
            println!(
                "Generating a complete depth-{depth} tree over {} words...",
                word_set.len()
            );
            let (stats, tree) =
                run_complete(&word_set, max_guesses, depth, num_games, !greedy_adversary);
            print_tree_overview(&tree);
            print_game_statistics("COMPLETE TREE", &stats);
        }
        Commands::Learn {
            num_games,
            exploration,
            decay,
            print_tree,
        } => {
            if !(0.0..=1.0).contains(&exploration) {
                bail!("exploration probability must be in [0, 1], got {exploration}");
            }

            println!("Learning from {num_games} exploring games...");
            let schedule = exploration_schedule(num_games, exploration, decay);
            let (result, tree) = run_learn(&word_set, max_guesses, &schedule);
            print_learning_result(&result);

            if print_tree {
                println!("\n{tree}");
            }
        }
    }

    Ok(())
}
