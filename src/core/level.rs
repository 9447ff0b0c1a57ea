use crate::core::Cell;

const F: Cell = Cell::Floor;
const W: Cell = Cell::Wall;
const T: Cell = Cell::Target;
const B: Cell = Cell::Box;
const A: Cell = Cell::Agent;

pub const LEVEL_HEIGHT: usize = 6;
pub const LEVEL_WIDTH: usize = 17;

/// The one built-in level
///
/// ```text
/// #################
/// #  #  #  #  #   #
/// #.$   #  #.$    #
/// #  #.$ .$   #   #
/// # @#  #  #  #   #
/// #################
/// ```
pub const REFERENCE_LEVEL: [[Cell; LEVEL_WIDTH]; LEVEL_HEIGHT] = [
    [W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W],
    [W, F, F, W, F, F, W, F, F, W, F, F, W, F, F, F, W],
    [W, T, B, F, F, F, W, F, F, W, T, B, F, F, F, F, W],
    [W, F, F, W, T, B, F, T, B, F, F, F, W, F, F, F, W],
    [W, F, A, W, F, F, W, F, F, W, F, F, W, F, F, F, W],
    [W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W, W],
];

pub fn reference_grid() -> Vec<Vec<Cell>> {
    REFERENCE_LEVEL.iter().map(|row| row.to_vec()).collect()
}
