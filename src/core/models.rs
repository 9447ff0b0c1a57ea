use serde::Serialize;

/// What a single grid square holds. Every kind other than `Wall` is a pair of
/// (is target, occupant), see [`Occupant`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Cell {
    Floor,
    Wall,
    Target,
    Box,
    Agent,
    BoxOnTarget,
    AgentOnTarget,
}

/// What stands on a walkable cell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Empty,
    Box,
    Agent,
}

/// Grid coordinate, `i` is the row and `j` the column
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Vec2 {
    #[serde(rename = "row")]
    pub i: i32,
    #[serde(rename = "col")]
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    AgentMove,
    AgentAndBoxMove,
}

/// Why a move left the grid untouched. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoOpReason {
    Solved,
    OutOfBounds,
    Wall,
    BoxBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved(GameChangeType),
    NoOp(NoOpReason),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("level has {0} agents, expected exactly one")]
    AgentCount(usize),
}
