mod grid_state;
mod level;
mod model_helpers;
mod models;
mod snapshot;
mod update;

pub use grid_state::GridState;
pub use level::{reference_grid, LEVEL_HEIGHT, LEVEL_WIDTH, REFERENCE_LEVEL};
pub use models::{
    Cell, Direction, GameChangeType, LevelError, MoveOutcome, NoOpReason, Occupant, UserAction,
    Vec2,
};
pub use snapshot::GridSnapshot;
