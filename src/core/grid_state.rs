use log::debug;
use crate::core::level::reference_grid;
use crate::core::{Cell, LevelError, Vec2};

/// The whole game: the grid, the move counter and the layout `reset` returns to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    grid: Vec<Vec<Cell>>,
    initial: Vec<Vec<Cell>>,
    move_count: u32,
}

impl GridState {
    /// A fresh game on the built-in level
    pub fn new() -> GridState {
        GridState::from_grid(reference_grid())
            .unwrap_or_else(|err| panic!("built-in level is malformed: {}", err))
    }

    /// Starts a game on `grid`, which also becomes the layout `reset` restores.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<GridState, LevelError> {
        let width = grid.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(LevelError::Empty);
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(LevelError::Ragged {
                    row,
                    found: cells.len(),
                    expected: width,
                });
            }
        }
        let agents = grid.iter().flatten().filter(|c| c.has_agent()).count();
        if agents != 1 {
            return Err(LevelError::AgentCount(agents));
        }

        Ok(GridState {
            initial: grid.clone(),
            grid,
            move_count: 0,
        })
    }

    pub fn reset(&mut self) {
        self.grid.clone_from(&self.initial);
        self.move_count = 0;
        debug!("game reset");
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        self.grid[0].len() as i32
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && pos.i < self.height() && pos.j < self.width()
    }

    /// `None` when `pos` is outside the grid
    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.grid[pos.i as usize][pos.j as usize])
    }

    pub(crate) fn set_cell(&mut self, pos: Vec2, cell: Cell) {
        self.grid[pos.i as usize][pos.j as usize] = cell;
    }

    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    /// Panics if the grid has lost its agent, which no sequence of moves can cause.
    pub fn agent_position(&self) -> Vec2 {
        for (i, row) in self.grid.iter().enumerate() {
            for (j, c) in row.iter().enumerate() {
                if c.has_agent() {
                    return Vec2 {
                        i: i as i32,
                        j: j as i32,
                    };
                }
            }
        }
        panic!("grid has no agent");
    }

    /// Solved once no bare target is left. An agent standing on a target
    /// leaves that target uncovered.
    pub fn is_solved(&self) -> bool {
        for row in &self.grid {
            for c in row {
                if *c == Cell::Target || *c == Cell::AgentOnTarget {
                    return false;
                }
            }
        }
        true
    }

    pub fn target_positions(&self) -> Vec<Vec2> {
        let mut targets = Vec::new();
        for (i, row) in self.grid.iter().enumerate() {
            for (j, c) in row.iter().enumerate() {
                if c.is_target() {
                    targets.push(Vec2 {
                        i: i as i32,
                        j: j as i32,
                    });
                }
            }
        }
        targets
    }

    pub fn count_boxes_on_targets(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::BoxOnTarget)
            .count()
    }
}

impl std::ops::Index<Vec2> for GridState {
    type Output = Cell;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.grid[index.i as usize][index.j as usize]
    }
}

impl Default for GridState {
    fn default() -> Self {
        GridState::new()
    }
}
