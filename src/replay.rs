use log::debug;
use crate::core::{Direction, GridState, UserAction};
use crate::error::ShellError;

/// Reads a move string: `U`, `D`, `L`, `R` move and `X` restarts. Case and
/// whitespace are ignored.
pub fn parse_moves(moves: &str) -> Result<Vec<UserAction>, ShellError> {
    moves
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch.to_ascii_uppercase() {
            'U' => Ok(UserAction::Move(Direction::Up)),
            'D' => Ok(UserAction::Move(Direction::Down)),
            'L' => Ok(UserAction::Move(Direction::Left)),
            'R' => Ok(UserAction::Move(Direction::Right)),
            'X' => Ok(UserAction::Restart),
            _ => Err(ShellError::UnknownMove(ch)),
        })
        .collect()
}

/// Joins the command-line arguments after `replay` into one move string, so
/// `replay U L` and `replay "U L"` play the same moves.
pub fn moves_from_args(args: impl Iterator<Item = String>) -> Result<String, ShellError> {
    let moves = args.collect::<Vec<_>>().join(" ");
    if moves.trim().is_empty() {
        return Err(ShellError::MissingMoves);
    }
    Ok(moves)
}

/// Plays `moves` on a fresh game and returns where it ended up
pub fn replay(moves: &str) -> Result<GridState, ShellError> {
    let actions = parse_moves(moves)?;
    let mut game = GridState::new();
    let mut rejected = 0;
    for &action in &actions {
        let outcome = game.perform(action);
        if outcome.is_some_and(|o| !o.is_move()) {
            rejected += 1;
        }
    }
    debug!("replayed {} actions, {} rejected", actions.len(), rejected);
    Ok(game)
}

pub fn run_replay(moves: &str) -> Result<(), ShellError> {
    let game = replay(moves)?;
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
