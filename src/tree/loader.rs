//! Game-log loading
//!
//! Rebuilds a game tree from a log of played games: one record per line,
//! comma-separated fields. A field starting with a status symbol (`Y`, `?`
//! or `N`) is a status; every other field is a guess word. Each record is
//! inserted as one move sequence from the tree root.

use super::{GameTree, Move};
use crate::core::{Status, Word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Build a game tree from a game-log file
///
/// # Errors
/// Returns an error if the file cannot be read or any field is neither a
/// valid status nor a valid word. Malformed records are contract
/// violations, not skippable noise.
///
/// # Examples
/// ```no_run
/// use adversarial_wordle::tree::load_game_tree;
///
/// let tree = load_game_tree("data/games/small_sample.csv").unwrap();
/// println!("Loaded tree of {} nodes", tree.size());
/// ```
pub fn load_game_tree<P: AsRef<Path>>(path: P) -> Result<GameTree> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game log {}", path.display()))?;

    let mut tree = GameTree::root();

    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let moves = parse_record(line)
            .with_context(|| format!("Malformed record on line {}", line_number + 1))?;
        tree.insert_move_sequence(&moves);
    }

    Ok(tree)
}

/// Parse one log record into a move sequence
fn parse_record(line: &str) -> Result<Vec<Move>> {
    line.split(',').map(|field| parse_field(field.trim())).collect()
}

/// Parse one field: status if it starts with a status symbol, guess otherwise
fn parse_field(field: &str) -> Result<Move> {
    if field.starts_with(['Y', '?', 'N']) {
        let status = Status::from_symbols(field)
            .with_context(|| format!("Invalid status field '{field}'"))?;
        Ok(Move::Status(status))
    } else {
        let word =
            Word::new(field).with_context(|| format!("Invalid guess field '{field}'"))?;
        Ok(Move::Guess(word))
    }
}
