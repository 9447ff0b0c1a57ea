use std::fmt;
use std::ops::Add;
use crate::core::{Cell, Direction, MoveOutcome, NoOpReason, Occupant, Vec2};

impl Cell {
    pub fn compose(is_target: bool, occupant: Occupant) -> Cell {
        match (is_target, occupant) {
            (false, Occupant::Empty) => Cell::Floor,
            (false, Occupant::Box) => Cell::Box,
            (false, Occupant::Agent) => Cell::Agent,
            (true, Occupant::Empty) => Cell::Target,
            (true, Occupant::Box) => Cell::BoxOnTarget,
            (true, Occupant::Agent) => Cell::AgentOnTarget,
        }
    }

    pub fn is_target(self) -> bool {
        matches!(self, Cell::Target | Cell::BoxOnTarget | Cell::AgentOnTarget)
    }

    /// `None` for walls, which can hold nothing
    pub fn occupant(self) -> Option<Occupant> {
        match self {
            Cell::Wall => None,
            Cell::Floor | Cell::Target => Some(Occupant::Empty),
            Cell::Box | Cell::BoxOnTarget => Some(Occupant::Box),
            Cell::Agent | Cell::AgentOnTarget => Some(Occupant::Agent),
        }
    }

    pub fn is_walkable(self) -> bool {
        self.occupant() == Some(Occupant::Empty)
    }

    pub fn has_box(self) -> bool {
        self.occupant() == Some(Occupant::Box)
    }

    pub fn has_agent(self) -> bool {
        self.occupant() == Some(Occupant::Agent)
    }

    /// Same target flavor, different occupant. Walls are returned unchanged.
    pub fn with_occupant(self, occupant: Occupant) -> Cell {
        debug_assert_ne!(self, Cell::Wall, "cannot place {:?} on a wall", occupant);
        if self == Cell::Wall {
            return Cell::Wall;
        }
        Cell::compose(self.is_target(), occupant)
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => ' ',
            Cell::Target => '.',
            Cell::Box => '$',
            Cell::BoxOnTarget => '*',
            Cell::Agent => '@',
            Cell::AgentOnTarget => '+',
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl MoveOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NoOpReason::Solved => "the puzzle is solved, press F2 for a new game",
            NoOpReason::OutOfBounds => "cannot leave the grid",
            NoOpReason::Wall => "cannot walk into a wall",
            NoOpReason::BoxBlocked => "the box is blocked",
        };
        f.write_str(text)
    }
}
